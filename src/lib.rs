//! luxmon-settings crate root: re-exports and module wiring.
//!
//! Settings persistence for a T-10 luxmeter monitor UI built on
//! egui/eframe. The crate holds the application's configuration record and
//! its JSON round trip:
//! - `settings`: the typed record, factory defaults, runtime-field rebuild
//! - `persistence`: JSON load/save, failure classification, the owned store
//! - `locale`: culture resolution and derived number/time formats
//! - `icons`: T-10 link-state icons loaded from the installation directory
//! - `window`: live window-geometry capture and manual placement
//! - `dialog`: open/save dialog start directories

pub mod dialog;
pub mod error;
pub mod icons;
pub mod locale;
pub mod persistence;
pub mod settings;
pub mod window;

// Public re-exports for a compact external API
pub use error::SettingsError;
pub use icons::StatusIcons;
pub use locale::Locale;
pub use persistence::{
    load_from_path, save_to_path, settings_from_json, settings_to_json, LoadOutcome, SettingsStore,
};
pub use settings::Settings;
pub use window::{WindowBridge, WindowGeometry};
