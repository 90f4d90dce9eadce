//! Model dimensions → wrapper `width`/`height`, with animation tracking
//! and one-time backfill of unset dimensions from the rendered size.

use easel_common::types::css_or_empty;
use tracing::{debug, trace};

use super::{FrameSyncController, SyncState};
use crate::element::{StyleProp, TransitionEvent};
use crate::host::RecalcOptions;
use crate::model::{FrameModel, FramePatch, SetOptions};

impl FrameSyncController {
    /// Apply the model's dimensions to the wrapper.
    ///
    /// Unchanged sizes commit right away. Changed sizes mark the wrapper as
    /// animating and commit once the transition ends.
    pub(super) fn update_dimensions(&mut self, model: &mut FrameModel) {
        let attrs = model.attributes();
        let width_unset = attrs.width.is_none();
        let height_unset = attrs.height.is_none();
        let new_w = css_or_empty(attrs.width.as_ref());
        let new_h = css_or_empty(attrs.height.as_ref());

        let changed = self.element.style(StyleProp::Width) != new_w
            || self.element.style(StyleProp::Height) != new_h;

        // Keep the highlighter from sticking to stale bounds mid-animation.
        self.host.stop_default(RecalcOptions::preserve_selected());
        self.frame.invalidate_rect();

        if changed {
            self.element.add_class(&self.anim_class);
        }
        self.element.set_style(StyleProp::Width, &new_w);
        self.element.set_style(StyleProp::Height, &new_h);
        trace!(frame = %self.id, width = %new_w, height = %new_h, changed, "dimensions applied");

        if width_unset || height_unset {
            self.backfill_dimensions(model, width_unset, height_unset);
        }

        if changed {
            self.await_transition();
        } else {
            self.schedule_commit();
        }
    }

    /// Write measured sizes for unset dimensions back to the model, silently.
    fn backfill_dimensions(&mut self, model: &mut FrameModel, width: bool, height: bool) {
        let (measured_w, measured_h) = self.element.offset_size();
        let mut patch = FramePatch::new();
        if width {
            patch = patch.width(measured_w);
        }
        if height {
            patch = patch.height(measured_h);
        }
        debug!(frame = %self.id, width = measured_w, height = measured_h, "backfilling measured dimensions");
        model.set(patch, SetOptions::silent());
    }

    fn await_transition(&mut self) {
        if self.element.transition_duration().is_zero() {
            self.finish_transition();
            return;
        }

        let since = self.clock.now();
        if let SyncState::AnimatingWait { .. } = self.sync {
            debug!(frame = %self.id, "transition wait already pending, re-arming");
        }
        self.sync = SyncState::AnimatingWait { since };
    }

    /// A transition-end variant fired on the wrapper.
    ///
    /// Only the first signal after a size change counts; the rest (other
    /// vendor variants, other properties) are ignored.
    pub fn on_transition_end(&mut self, event: TransitionEvent) {
        if self.removed {
            return;
        }
        match self.sync {
            SyncState::AnimatingWait { .. } => {
                debug!(frame = %self.id, event = event.dom_name(), "transition finished");
                self.finish_transition();
            }
            SyncState::Idle => {
                trace!(frame = %self.id, event = event.dom_name(), "transition end while idle");
            }
        }
    }

    pub(super) fn finish_transition(&mut self) {
        self.sync = SyncState::Idle;
        self.element.remove_class(&self.anim_class);
        self.schedule_commit();
    }
}
