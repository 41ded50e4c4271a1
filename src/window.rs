//! Bridge between the settings record and the live window.
//!
//! The bridge observes the viewport's outer position and client size each
//! frame and queues manual placement requests, so the persistence layer can
//! capture live geometry on save and restore it on load without touching
//! UI code directly. Positions and sizes are in logical points, matching
//! `egui::ViewportCommand`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Window outer position and client size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Observes and controls the live window geometry.
///
/// Cloneable handle around shared state: the UI calls
/// [`observe`](Self::observe) every frame and drains
/// [`take_commands`](Self::take_commands); non-UI code reads
/// [`current_geometry`](Self::current_geometry) and queues
/// [`request_placement`](Self::request_placement).
#[derive(Clone)]
pub struct WindowBridge {
    inner: Arc<Mutex<BridgeInner>>,
}

struct BridgeInner {
    current_pos: Option<[i32; 2]>,
    current_size: Option<[i32; 2]>,
    pending: Option<WindowGeometry>,
    listeners: Vec<Sender<WindowGeometry>>,
}

impl WindowBridge {
    /// Create a fresh bridge with no observed geometry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BridgeInner {
                current_pos: None,
                current_size: None,
                pending: None,
                listeners: Vec::new(),
            })),
        }
    }

    /// Record the viewport's current outer position and inner (client) size.
    /// Call once per frame from the UI update loop.
    pub fn observe(&self, ctx: &egui::Context) {
        let (outer, inner) = ctx.input(|i| {
            let vp = i.viewport();
            (vp.outer_rect, vp.inner_rect)
        });
        let pos = outer.map(|r| [r.min.x.round() as i32, r.min.y.round() as i32]);
        let size = inner.map(|r| [r.width().round() as i32, r.height().round() as i32]);
        self.update_current(pos, size);
    }

    /// Record geometry directly, for hosts that are not driven by egui.
    pub fn set_current(&self, pos: [i32; 2], size: [i32; 2]) {
        self.update_current(Some(pos), Some(size));
    }

    fn update_current(&self, pos: Option<[i32; 2]>, size: Option<[i32; 2]>) {
        let mut inner = self.inner.lock().unwrap();
        let before = (inner.current_pos, inner.current_size);
        if pos.is_some() {
            inner.current_pos = pos;
        }
        if size.is_some() {
            inner.current_size = size;
        }
        if (inner.current_pos, inner.current_size) != before {
            if let Some(geometry) = geometry_of(&inner) {
                inner.listeners.retain(|tx| tx.send(geometry).is_ok());
            }
        }
    }

    /// Last observed geometry, once both position and size have been seen.
    pub fn current_geometry(&self) -> Option<WindowGeometry> {
        geometry_of(&self.inner.lock().unwrap())
    }

    /// Queue a manual placement. The UI applies it by draining
    /// [`take_commands`](Self::take_commands).
    pub fn request_placement(&self, geometry: WindowGeometry) {
        self.inner.lock().unwrap().pending = Some(geometry);
    }

    /// Drain the pending placement request as viewport commands
    /// (outer position, then inner size). Empty when nothing is queued.
    pub fn take_commands(&self) -> Vec<egui::ViewportCommand> {
        match self.inner.lock().unwrap().pending.take() {
            Some(g) => vec![
                egui::ViewportCommand::OuterPosition(egui::pos2(g.left as f32, g.top as f32)),
                egui::ViewportCommand::InnerSize(egui::vec2(g.width as f32, g.height as f32)),
            ],
            None => Vec::new(),
        }
    }

    /// Subscribe to geometry updates. The receiver gets a value whenever the
    /// observed position or size changes.
    pub fn subscribe(&self) -> Receiver<WindowGeometry> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.inner.lock().unwrap().listeners.push(tx);
        rx
    }
}

impl Default for WindowBridge {
    fn default() -> Self {
        Self::new()
    }
}

fn geometry_of(inner: &BridgeInner) -> Option<WindowGeometry> {
    match (inner.current_pos, inner.current_size) {
        (Some([left, top]), Some([width, height])) => Some(WindowGeometry {
            left,
            top,
            width,
            height,
        }),
        _ => None,
    }
}
