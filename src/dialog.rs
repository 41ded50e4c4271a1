//! File-dialog start directories.
//!
//! Open/save dialogs start in the user's last directory when the record's
//! remember flag is set, and in the fixed defaults otherwise: the desktop
//! for saving, the `examples` directory shipped beside the executable for
//! opening.

use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// The user's desktop directory, falling back to the home directory and
/// then the working directory.
pub fn desktop_dir() -> PathBuf {
    match homedir::my_home() {
        Ok(Some(home)) => home.join("Desktop"),
        _ => PathBuf::from("."),
    }
}

/// The `examples` directory next to the running executable
/// (`./examples` when the executable path is unknown).
pub fn examples_dir_beside_exe() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("examples")
}

/// Directory a save dialog should start in.
pub fn save_start_dir(settings: &Settings) -> &Path {
    if settings.remember_dialog_path {
        &settings.user_save_path
    } else {
        &settings.default_save_path
    }
}

/// Directory an open dialog should start in.
pub fn open_start_dir(settings: &Settings) -> &Path {
    if settings.remember_dialog_path {
        &settings.user_open_path
    } else {
        &settings.default_open_path
    }
}

/// A save dialog pre-seeded with the start directory.
pub fn save_dialog(settings: &Settings) -> rfd::FileDialog {
    rfd::FileDialog::new().set_directory(save_start_dir(settings))
}

/// An open dialog pre-seeded with the start directory.
pub fn open_dialog(settings: &Settings) -> rfd::FileDialog {
    rfd::FileDialog::new().set_directory(open_start_dir(settings))
}

/// Record the directory of a picked save file for the next dialog.
/// No-op when the remember flag is off.
pub fn remember_save_dir(settings: &mut Settings, picked: &Path) {
    if !settings.remember_dialog_path {
        return;
    }
    if let Some(dir) = picked.parent() {
        settings.user_save_path = dir.to_path_buf();
    }
}

/// Record the directory of a picked open file for the next dialog.
/// No-op when the remember flag is off.
pub fn remember_open_dir(settings: &mut Settings, picked: &Path) {
    if !settings.remember_dialog_path {
        return;
    }
    if let Some(dir) = picked.parent() {
        settings.user_open_path = dir.to_path_buf();
    }
}
