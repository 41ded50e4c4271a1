//! Crate-wide error type.

/// Errors produced by the settings layer.
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown locale '{name}'")]
    InvalidLocale { name: String },
}

impl SettingsError {
    /// `true` when the underlying cause is a missing file.
    ///
    /// Load treats a missing settings file as benign (keep defaults, no
    /// notification), unlike every other failure.
    pub fn is_file_absent(&self) -> bool {
        matches!(self, SettingsError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
