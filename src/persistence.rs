//! Settings persistence: load and save the record to/from its JSON file.
//!
//! Two layers: free functions for the plain JSON round trip, and
//! [`SettingsStore`], which owns the live record, classifies load failures
//! (a missing file is benign, anything else keeps defaults and emits one
//! user-facing notification) and bridges to the window geometry.

use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};

use crate::error::SettingsError;
use crate::settings::Settings;
use crate::window::WindowBridge;

// ---------- Pure JSON layer ----------

/// Serialize the settings record as pretty JSON.
pub fn settings_to_json(settings: &Settings) -> Result<String, SettingsError> {
    Ok(serde_json::to_string_pretty(settings)?)
}

/// Deserialize a settings record from JSON.
pub fn settings_from_json(json: &str) -> Result<Settings, SettingsError> {
    Ok(serde_json::from_str(json)?)
}

/// Write the settings record to a JSON file, overwriting existing content.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let txt = settings_to_json(settings)?;
    std::fs::write(path, txt)?;
    Ok(())
}

/// Read a settings record from a JSON file.
pub fn load_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let txt = std::fs::read_to_string(path)?;
    settings_from_json(&txt)
}

// ---------- Store ----------

/// Result of [`SettingsStore::load`].
#[derive(Debug)]
pub enum LoadOutcome {
    /// File read and parsed; the record was replaced.
    Loaded,
    /// No settings file yet; the current record was kept silently.
    NoFile,
    /// File present but unusable; the current record was kept and one
    /// notification was emitted.
    Failed(SettingsError),
}

/// Owns the settings record and drives the load/save round trip.
///
/// The store is plain owned state, passed by reference to whichever
/// component needs it; errors surface through
/// [`subscribe_errors`](Self::subscribe_errors) (and
/// [`last_error`](Self::last_error)) so the UI can show them without the
/// store knowing about dialogs.
pub struct SettingsStore {
    settings: Settings,
    window: Option<WindowBridge>,
    error_listeners: Vec<Sender<String>>,
    last_error: Option<String>,
}

impl SettingsStore {
    /// Create a store around an existing record.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window: None,
            error_listeners: Vec::new(),
            last_error: None,
        }
    }

    /// Current record.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the current record.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Attach the live-window bridge. Load then queues a manual placement;
    /// save captures the observed geometry first.
    pub fn attach_window(&mut self, bridge: WindowBridge) {
        self.window = Some(bridge);
    }

    /// Subscribe to user-facing error notifications.
    pub fn subscribe_errors(&mut self) -> Receiver<String> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.error_listeners.push(tx);
        rx
    }

    /// The most recent error notification, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Load the record from the file named by its `file_name` field.
    ///
    /// A missing file keeps the current record with no notification. Any
    /// other failure (I/O, malformed JSON, unresolvable locale) also keeps
    /// the current record but emits exactly one notification carrying the
    /// underlying message. Never panics or propagates: the application
    /// stays usable either way.
    pub fn load(&mut self) -> LoadOutcome {
        let path = self.settings.file_name.clone();
        match load_from_path(&path) {
            Ok(mut loaded) => {
                let install = self.settings.install_path.clone();
                let install = (!install.as_os_str().is_empty()).then_some(install);
                loaded.reinitialize_runtime_fields(install.as_deref());
                if let Some(bridge) = &self.window {
                    bridge.request_placement(loaded.geometry());
                }
                self.settings = loaded;
                log::info!("loaded settings from {:?}", path);
                LoadOutcome::Loaded
            }
            Err(e) if e.is_file_absent() => {
                log::info!("no settings file at {:?}, using defaults", path);
                LoadOutcome::NoFile
            }
            Err(e) => {
                self.notify(format!(
                    "Error loading settings file: {e}. Default values will be used instead."
                ));
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Save the record to the file named by its `file_name` field,
    /// capturing the live window geometry first.
    ///
    /// A write failure is reported (returned and emitted as a notification)
    /// but is never fatal; shutdown proceeds regardless.
    pub fn save(&mut self) -> Result<(), SettingsError> {
        if let Some(geometry) = self.window.as_ref().and_then(|b| b.current_geometry()) {
            self.settings.set_geometry(geometry);
        }
        let result = save_to_path(&self.settings, &self.settings.file_name);
        match result {
            Ok(()) => {
                log::info!("saved settings to {:?}", self.settings.file_name);
                Ok(())
            }
            Err(e) => {
                self.notify(format!("Error saving settings file: {e}"));
                Err(e)
            }
        }
    }

    fn notify(&mut self, message: String) {
        log::warn!("{message}");
        self.error_listeners
            .retain(|tx| tx.send(message.clone()).is_ok());
        self.last_error = Some(message);
    }
}
