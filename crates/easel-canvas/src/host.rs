//! Capabilities the canvas host exposes to frame controllers.

use easel_common::types::FrameId;
use serde::{Deserialize, Serialize};

use crate::tools::ToolsOverlay;

/// Options for the host's default tool recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecalcOptions {
    /// Keep the current selection target while re-running.
    pub preserve_selected: bool,
}

impl RecalcOptions {
    pub fn preserve_selected() -> Self {
        Self {
            preserve_selected: true,
        }
    }
}

/// The editor hosting the canvas.
///
/// Shared by every frame controller on the canvas, hence `&self`.
pub trait CanvasHost {
    /// Current canvas zoom expressed as a screen-to-canvas multiplier.
    fn zoom_multiplier(&self) -> f64;

    /// Re-run the default tool (highlighter, badge, offsets) against the
    /// current selection.
    fn run_default(&self, opts: RecalcOptions);

    /// Stop the default tool until the next [`CanvasHost::run_default`].
    fn stop_default(&self, opts: RecalcOptions);

    /// Enable or disable pointer events on every frame of the canvas.
    fn toggle_frames_events(&self, enabled: bool);

    /// Mount a frame's overlay tools in the shared tools wrapper.
    fn attach_tools(&self, frame: FrameId, tools: &ToolsOverlay);

    /// Unmount a frame's overlay tools.
    fn detach_tools(&self, frame: FrameId);
}
