//! Model coordinates → wrapper `left`/`top`.

use easel_common::types::css_or_empty;
use tracing::trace;

use super::FrameSyncController;
use crate::element::StyleProp;
use crate::model::FrameModel;

/// Why a position update runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PositionOrigin {
    /// First placement at construction; tooling has nothing to refresh yet.
    Initial,
    /// A model notification (drag move, manual edit).
    Change,
}

impl FrameSyncController {
    pub(super) fn update_position(&mut self, model: &FrameModel, origin: PositionOrigin) {
        let attrs = model.attributes();
        let left = css_or_empty(attrs.x.as_ref());
        let top = css_or_empty(attrs.y.as_ref());

        self.frame.invalidate_rect();
        self.element.set_style(StyleProp::Left, &left);
        self.element.set_style(StyleProp::Top, &top);
        trace!(frame = %self.id, %left, %top, ?origin, "position applied");

        if origin == PositionOrigin::Change {
            self.schedule_commit();
        }
    }
}
