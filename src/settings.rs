//! The settings record: window placement, T-10 link parameters, plot
//! options, locale and filesystem paths.
//!
//! One flat record, serialized to a single JSON object. The JSON keys are
//! the stable external names of each field (including the historical
//! misspelling `"Chareacter off"`, preserved for compatibility with files
//! written by earlier releases). Fields marked `#[serde(skip)]` never
//! appear in the file and must be rebuilt after every load via
//! [`Settings::reinitialize_runtime_fields`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dialog;
use crate::error::SettingsError;
use crate::icons::StatusIcons;
use crate::locale::Locale;
use crate::window::WindowGeometry;

/// Default settings file name, resolved against the working directory
/// unless the caller overrides [`Settings::file_name`].
pub const DEFAULT_FILE_NAME: &str = "configuration.json";

/// Default decimal-number format pattern for measured values.
pub const DEFAULT_DATA_FORMAT: &str = "#0.0##";

/// Leading columns in the data table that hold computed (not measured)
/// values.
pub const DEFAULT_FIXED_COLUMNS: usize = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Current configuration of the monitor application.
///
/// Construction through [`Default`] yields the literal factory defaults for
/// every persisted field; deserializing a file with missing keys leaves the
/// affected fields at their *type's* zero value instead (empty strings,
/// zeros, `false`), matching the behaviour of files written by earlier
/// releases. Unrecognized keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Window placement (outer position, client size; pixels) ───────────────
    #[serde(rename = "Window top", default)]
    pub window_top: i32,
    #[serde(rename = "Window left", default)]
    pub window_left: i32,
    #[serde(rename = "Window width", default)]
    pub window_width: i32,
    #[serde(rename = "Window height", default)]
    pub window_height: i32,

    // ── T-10 link ────────────────────────────────────────────────────────────
    #[serde(rename = "Location id", default)]
    pub location_id: i32,
    #[serde(rename = "Number of sensors", default)]
    pub sensor_count: i32,
    #[serde(rename = "Baud rate", default)]
    pub baud_rate: i32,
    #[serde(rename = "Data bits", default)]
    pub data_bits: i32,
    #[serde(rename = "Stop bits", default)]
    pub stop_bits: i32,
    /// Parity as the device's numeric code.
    #[serde(rename = "Parity", default)]
    pub parity: i32,
    /// Flow control as the device's numeric code.
    #[serde(rename = "Flow control", default)]
    pub flow_control: i32,
    #[serde(rename = "Character on", default)]
    pub char_on: i32,
    // Key misspelling is load-bearing: existing files use it.
    #[serde(rename = "Chareacter off", default)]
    pub char_off: i32,
    /// Sampling frequency in Hz.
    #[serde(rename = "Sample frequency", default)]
    pub sample_frequency: f64,

    // ── Plotting ─────────────────────────────────────────────────────────────
    /// Number of points the acquisition array can store.
    #[serde(rename = "Array points", default)]
    pub array_points: usize,
    /// Width of the moving plot window, in points.
    #[serde(rename = "Plots moving window points", default)]
    pub window_points: usize,
    #[serde(rename = "Show illuminance plot", default)]
    pub show_illuminance: bool,
    #[serde(rename = "Show distribution plot", default)]
    pub show_distribution: bool,
    #[serde(rename = "Show average plot", default)]
    pub show_average: bool,
    #[serde(rename = "Show ratios plot", default)]
    pub show_ratios: bool,
    /// Radar-style distribution plot when `true`, bar-style otherwise.
    #[serde(rename = "Distribution is radar", default)]
    pub distribution_is_radar: bool,
    #[serde(rename = "Pixels between legends", default)]
    pub px_between_legends: i32,

    // ── Locale ───────────────────────────────────────────────────────────────
    /// Culture used throughout the app. Persisted as its canonical name.
    #[serde(rename = "Culture", default)]
    pub locale: Locale,

    // ── File dialogs ─────────────────────────────────────────────────────────
    /// Remember the user's previous directory in open/save dialogs.
    #[serde(rename = "Remember path in FileDlg?", default)]
    pub remember_dialog_path: bool,
    #[serde(rename = "Default save path", default)]
    pub default_save_path: PathBuf,
    #[serde(rename = "User save path", default)]
    pub user_save_path: PathBuf,
    #[serde(rename = "Default open path", default)]
    pub default_open_path: PathBuf,
    #[serde(rename = "User open path", default)]
    pub user_open_path: PathBuf,

    // ── Runtime only, never persisted ────────────────────────────────────────
    /// Settings file name.
    #[serde(skip)]
    pub file_name: PathBuf,
    /// Absolute path of the installation directory (empty when unknown).
    #[serde(skip)]
    pub install_path: PathBuf,
    /// Leading non-measured columns in the data table.
    #[serde(skip)]
    pub fixed_columns: usize,
    /// Decimal-number format pattern for measured values.
    #[serde(skip)]
    pub data_format: String,
    /// T-10 link-state icons, loaded relative to `install_path`.
    #[serde(skip)]
    pub icons: StatusIcons,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_top: 0,
            window_left: 0,
            window_width: 950,
            window_height: 650,

            location_id: 0,
            sensor_count: 1,
            baud_rate: 9600,
            data_bits: 7,
            stop_bits: 0,
            parity: 2,
            flow_control: 0,
            char_on: 11,
            char_off: 13,
            sample_frequency: 2.0,

            array_points: 7200,
            window_points: 20,
            show_illuminance: true,
            show_distribution: true,
            show_average: true,
            show_ratios: true,
            distribution_is_radar: true,
            px_between_legends: 10,

            locale: Locale::system_default(),

            remember_dialog_path: true,
            default_save_path: dialog::desktop_dir(),
            user_save_path: dialog::desktop_dir(),
            default_open_path: dialog::examples_dir_beside_exe(),
            user_open_path: dialog::examples_dir_beside_exe(),

            file_name: PathBuf::from(DEFAULT_FILE_NAME),
            install_path: PathBuf::new(),
            fixed_columns: DEFAULT_FIXED_COLUMNS,
            data_format: DEFAULT_DATA_FORMAT.to_string(),
            icons: StatusIcons::default(),
        }
    }
}

impl Settings {
    /// Factory defaults plus the installation directory, with the status
    /// icons loaded from `images/` under it (missing files silently
    /// skipped).
    pub fn with_install_dir(install_dir: impl Into<PathBuf>) -> Self {
        let install_dir = install_dir.into();
        Self {
            icons: StatusIcons::load(&install_dir),
            install_path: install_dir,
            ..Self::default()
        }
    }

    /// Rebuild the fields the serializer never touches.
    ///
    /// Must be called after every deserialization: resets the file name,
    /// fixed column count and data format to their defaults, records the
    /// installation path (empty when `None`), and reloads the status icons
    /// when the path is non-empty.
    pub fn reinitialize_runtime_fields(&mut self, install_dir: Option<&Path>) {
        self.file_name = PathBuf::from(DEFAULT_FILE_NAME);
        self.install_path = install_dir.map(Path::to_path_buf).unwrap_or_default();
        self.fixed_columns = DEFAULT_FIXED_COLUMNS;
        self.data_format = DEFAULT_DATA_FORMAT.to_string();
        if !self.install_path.as_os_str().is_empty() {
            self.icons = StatusIcons::load(&self.install_path);
        }
    }

    /// Set the locale by name; fails on an unresolvable name and leaves the
    /// current locale untouched.
    pub fn set_locale_name(&mut self, name: &str) -> Result<(), SettingsError> {
        self.locale = Locale::resolve(name)?;
        Ok(())
    }

    /// Canonical name of the current locale.
    pub fn locale_name(&self) -> &str {
        self.locale.name()
    }

    /// Milliseconds format pattern derived from the current locale.
    /// Recomputed on every read.
    pub fn milliseconds_format(&self) -> String {
        self.locale.milliseconds_format()
    }

    /// The four window fields as one geometry value.
    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry {
            left: self.window_left,
            top: self.window_top,
            width: self.window_width,
            height: self.window_height,
        }
    }

    /// Store a geometry value into the four window fields.
    pub fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.window_left = geometry.left;
        self.window_top = geometry.top;
        self.window_width = geometry.width;
        self.window_height = geometry.height;
    }

    /// Native-window options placing the window manually at the recorded
    /// position and client size, for use with `eframe::run_native`.
    pub fn native_options(&self) -> eframe::NativeOptions {
        let viewport = egui::ViewportBuilder::default()
            .with_position([self.window_left as f32, self.window_top as f32])
            .with_inner_size([self.window_width as f32, self.window_height as f32]);
        eframe::NativeOptions {
            viewport,
            ..Default::default()
        }
    }
}
