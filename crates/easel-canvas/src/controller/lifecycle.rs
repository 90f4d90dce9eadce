//! Rendering, action hooks, and removal.

use easel_common::events::Event;
use tracing::{debug, info};

use super::{FrameAction, FrameSyncController, SyncState};
use crate::drag::PointerEvent;
use crate::host::RecalcOptions;
use crate::tools::ToolsOverlay;

impl FrameSyncController {
    /// Render the embedded frame, set the wrapper class, and mount the
    /// overlay tools in the host's tools wrapper.
    ///
    /// Returns `None` once the frame has been removed.
    pub fn render(&mut self) -> Option<&ToolsOverlay> {
        if self.removed {
            return None;
        }
        self.frame.render();
        self.element.set_class_name(&self.options.wrapper_class());

        if let Some(old) = self.tools.take() {
            debug!(frame = %self.id, nodes = old.node_count(), "re-rendering, replacing tools");
            self.host.detach_tools(self.id);
        }
        let tools = ToolsOverlay::new(&self.options.style_prefix);
        self.host.attach_tools(self.id, &tools);
        Some(self.tools.insert(tools))
    }

    /// Dispatch a wrapper hook.
    pub fn on_action(&mut self, action: FrameAction, event: Option<&PointerEvent>) {
        match action {
            FrameAction::Remove => self.remove(),
            FrameAction::Move => self.start_drag(event),
        }
    }

    /// Tear down the frame and its tools. The controller ignores all input
    /// afterwards.
    pub fn remove(&mut self) {
        if self.removed {
            return;
        }
        self.frame.remove();
        if self.tools.take().is_some() {
            self.host.detach_tools(self.id);
        }
        if self.session.take().is_some() {
            self.host.toggle_frames_events(true);
        }
        // The default tool was stopped for a size change that will now
        // never commit; bring it back before going inert.
        if self.commit.is_pending() || matches!(self.sync, SyncState::AnimatingWait { .. }) {
            self.host.run_default(RecalcOptions::preserve_selected());
        }
        self.commit.cancel();
        self.sync = SyncState::Idle;
        self.removed = true;

        self.bus.publish(Event::FrameRemoved(self.id));
        info!(frame = %self.id, "frame removed");
    }
}
