//! Relaying scrolls of the embedded viewport to the canvas bus.

use easel_common::events::Event;
use tracing::trace;

use super::FrameSyncController;

impl FrameSyncController {
    pub(super) fn attach_scroll_relay(&mut self) {
        if !self.scroll_attached {
            self.scroll_attached = true;
            self.bus.publish(Event::FrameLoaded(self.id));
        }
    }

    /// The embedded viewport scrolled. Publishes `frame:scroll` once the
    /// frame has loaded; earlier scrolls are dropped.
    pub fn on_frame_scroll(&mut self) {
        if self.removed || !self.scroll_attached {
            trace!(frame = %self.id, "scroll before load ignored");
            return;
        }
        self.bus.publish(Event::FrameScroll {
            frame: self.id,
            body: self.frame.body(),
            target: self.frame.window(),
        });
    }
}
