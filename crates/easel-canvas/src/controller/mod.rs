//! The frame sync controller.
//!
//! One controller per frame wrapper. The host forwards four kinds of input:
//!
//! - model notifications, drained by [`FrameSyncController::process_model_events`]
//! - element signals ([`FrameSyncController::on_transition_end`],
//!   [`FrameSyncController::on_frame_scroll`], [`FrameSyncController::on_action`])
//! - drag progress ([`FrameSyncController::on_drag`])
//! - periodic [`FrameSyncController::tick`]s, which run the debounced commit
//!   and expire stale transition waits
//!
//! Everything runs on the host's loop; nothing here blocks or spawns.

mod commit;
mod dimension;
mod drag;
mod lifecycle;
mod position;
mod scroll;
mod types;


pub use types::*;

use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, warn};

use crate::model::{ChangeSet, FrameModel, ModelEvent};
use position::PositionOrigin;

impl FrameSyncController {
    /// Handle every notification the model has broadcast since the last call.
    ///
    /// Writes made by anyone, including this controller's own drag, arrive
    /// here. Silent writes never do.
    pub fn process_model_events(&mut self, model: &mut FrameModel) {
        loop {
            let next = self.model_rx.try_recv();
            match next {
                Ok(ModelEvent::Changed(changes)) => self.on_model_change(model, changes),
                Ok(ModelEvent::Loaded) => self.on_loaded(model),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                Err(TryRecvError::Lagged(missed)) => {
                    warn!(frame = %self.id, missed, "missed model notifications, resyncing geometry");
                    self.on_model_change(model, ChangeSet::geometry());
                    if model.is_loaded() && !self.scroll_attached && !self.removed {
                        debug!(frame = %self.id, "load notification was missed, attaching scroll relay");
                        self.attach_scroll_relay();
                    }
                }
            }
        }
    }

    fn on_model_change(&mut self, model: &mut FrameModel, changes: ChangeSet) {
        if self.removed {
            return;
        }
        debug!(frame = %self.id, ?changes, "model changed");
        if changes.position() {
            self.update_position(model, PositionOrigin::Change);
        }
        if changes.dimensions() {
            self.update_dimensions(model);
        }
    }

    fn on_loaded(&mut self, model: &mut FrameModel) {
        if self.removed {
            return;
        }
        self.update_dimensions(model);
        self.attach_scroll_relay();
    }
}
