//! Dragging the wrapper by its move hook.

use tracing::{debug, trace};

use super::FrameSyncController;
use crate::drag::{DragSession, DragSignal, PointerEvent};
use crate::model::{FrameModel, SetOptions};

impl FrameSyncController {
    /// Hand a pointer-down to the drag primitive.
    ///
    /// Without a real originating event there is nothing to track from,
    /// so the call is ignored.
    pub fn start_drag(&mut self, event: Option<&PointerEvent>) {
        if self.removed {
            return;
        }
        let Some(event) = event else {
            trace!(frame = %self.id, "start_drag without pointer event ignored");
            return;
        };
        self.drag.start(event);
    }

    /// Progress reported by the drag primitive.
    pub fn on_drag(&mut self, model: &mut FrameModel, signal: DragSignal) {
        if self.removed {
            return;
        }
        match signal {
            DragSignal::Start => {
                let session = DragSession::begin(model.attributes(), self.host.zoom_multiplier());
                debug!(frame = %self.id, ?session, "drag started");
                self.session = Some(session);
                self.host.toggle_frames_events(false);
            }
            DragSignal::Move(delta) => {
                let Some(session) = self.session else {
                    trace!(frame = %self.id, "drag move outside a session ignored");
                    return;
                };
                // An observable write: position sync picks it up like any
                // other coordinate change.
                model.set(session.patch_for(delta), SetOptions::default());
                self.process_model_events(model);
            }
            DragSignal::End => {
                if self.session.take().is_some() {
                    debug!(frame = %self.id, "drag ended");
                    self.host.toggle_frames_events(true);
                }
            }
        }
    }
}
