//! The debounced overlay recalculation and the tick that drives it.

use std::time::Instant;

use tracing::{debug, warn};

use super::{FrameSyncController, SyncState};
use crate::host::RecalcOptions;

impl FrameSyncController {
    /// Request an overlay recalculation. Calls inside the debounce window
    /// collapse into one.
    pub(super) fn schedule_commit(&mut self) {
        let now = self.clock.now();
        self.commit.call(now);
    }

    /// Advance timers: expire a stale transition wait, then run the commit
    /// if its quiet window has passed. Returns whether the commit ran.
    pub fn tick(&mut self) -> bool {
        if self.removed {
            return false;
        }
        let now = self.clock.now();
        self.expire_transition_wait(now);

        if self.commit.poll(now) {
            self.run_commit();
            true
        } else {
            false
        }
    }

    fn expire_transition_wait(&mut self, now: Instant) {
        let (SyncState::AnimatingWait { since }, Some(fallback)) =
            (self.sync, self.options.transition_fallback)
        else {
            return;
        };
        if now.duration_since(since) >= fallback {
            warn!(
                frame = %self.id,
                waited_ms = fallback.as_millis() as u64,
                "no transition end received, committing anyway"
            );
            self.finish_transition();
        }
    }

    fn run_commit(&mut self) {
        debug!(frame = %self.id, "recalculating overlay tools");
        self.host.run_default(RecalcOptions::preserve_selected());
        self.element.remove_class(&self.anim_class);
    }
}
