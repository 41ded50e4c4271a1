//! Device status icons loaded from the installation directory.
//!
//! The monitor UI shows a small icon for the T-10 link state: closed,
//! open/ready, or actively exchanging data. The images live under
//! `images/` next to the executable and are optional — a missing or
//! undecodable file simply leaves that slot empty.

use std::path::Path;

use image::imageops::FilterType;
use image::RgbaImage;

/// Icon edge length in pixels.
pub const ICON_EDGE: u32 = 16;

/// The three link-state icons. All slots optional; owned images are
/// released when the value is dropped or replaced.
#[derive(Debug, Clone, Default)]
pub struct StatusIcons {
    /// Link closed.
    pub closed: Option<RgbaImage>,
    /// Link open, ready for commands.
    pub open: Option<RgbaImage>,
    /// Data being sent/received.
    pub active: Option<RgbaImage>,
}

impl StatusIcons {
    /// Load the icon set from `images/` under `install_dir`.
    ///
    /// Looks for `close.*`, `open.*` and `exchange.*` (ICO preferred, PNG
    /// fallback), decoded to RGBA and scaled to 16×16. Missing files are
    /// skipped silently.
    pub fn load(install_dir: &Path) -> StatusIcons {
        let images = install_dir.join("images");
        StatusIcons {
            closed: load_icon(&images, "close"),
            open: load_icon(&images, "open"),
            active: load_icon(&images, "exchange"),
        }
    }

    /// Drop all loaded images.
    pub fn clear(&mut self) {
        *self = StatusIcons::default();
    }

    /// `true` when no icon is loaded.
    pub fn is_empty(&self) -> bool {
        self.closed.is_none() && self.open.is_none() && self.active.is_none()
    }
}

fn load_icon(dir: &Path, stem: &str) -> Option<RgbaImage> {
    for ext in ["ico", "png"] {
        let path = dir.join(format!("{stem}.{ext}"));
        if !path.exists() {
            continue;
        }
        match image::open(&path) {
            Ok(img) => {
                let img = if img.width() != ICON_EDGE || img.height() != ICON_EDGE {
                    img.resize_exact(ICON_EDGE, ICON_EDGE, FilterType::Triangle)
                } else {
                    img
                };
                return Some(img.to_rgba8());
            }
            Err(e) => log::debug!("skipping icon {:?}: {}", path, e),
        }
    }
    None
}

/// Convert a loaded icon to an [`egui::ColorImage`] for texture upload.
pub fn to_color_image(img: &RgbaImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [img.width() as usize, img.height() as usize],
        img.as_raw(),
    )
}
