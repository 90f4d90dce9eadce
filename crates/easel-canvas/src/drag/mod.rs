//! Frame drag types: pointer input, primitive capability, per-drag session.
//!
//! The low-level pointer tracking lives behind [`DragPrimitive`]. Once
//! started, the primitive reports back through [`DragSignal`]s, which the
//! host forwards to the frame's controller.

mod session;

pub use session::DragSession;

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// The pointer event that starts a drag (a `mousedown` on the move hook).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub button: u8,
}

impl PointerEvent {
    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            button: 0,
        }
    }
}

/// Cumulative pointer travel since the drag began, in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DragDelta {
    pub x: f64,
    pub y: f64,
}

/// Progress reported by a [`DragPrimitive`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSignal {
    Start,
    Move(DragDelta),
    End,
}

/// Pointer tracking capability injected into a controller.
pub trait DragPrimitive {
    /// Begin tracking from `origin`. Progress arrives later as
    /// [`DragSignal`]s.
    fn start(&mut self, origin: &PointerEvent);
}
