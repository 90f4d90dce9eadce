//! State of one drag, from start to end.

use easel_common::types::Length;
use tracing::debug;

use super::DragDelta;
use crate::model::{FrameAttributes, FramePatch};

/// Origin and zoom captured when a drag starts.
///
/// Zoom is read once so that zooming mid-drag does not distort the
/// remaining moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_x: f64,
    pub origin_y: f64,
    pub zoom: f64,
}

impl DragSession {
    pub fn begin(attrs: &FrameAttributes, zoom: f64) -> Self {
        Self {
            origin_x: origin_px("x", attrs.x.as_ref()),
            origin_y: origin_px("y", attrs.y.as_ref()),
            zoom,
        }
    }

    /// Model coordinates for a cumulative screen delta.
    pub fn position_for(&self, delta: DragDelta) -> (f64, f64) {
        (
            self.origin_x + delta.x * self.zoom,
            self.origin_y + delta.y * self.zoom,
        )
    }

    pub fn patch_for(&self, delta: DragDelta) -> FramePatch {
        let (x, y) = self.position_for(delta);
        FramePatch::new().x(x).y(y)
    }
}

/// Pixel origin of a coordinate. Unset and non-pixel values drag from 0.
fn origin_px(axis: &str, value: Option<&Length>) -> f64 {
    match value.and_then(Length::as_px) {
        Some(px) => px,
        None => {
            debug!(axis, ?value, "non-pixel drag origin, starting from 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(x: Option<Length>, y: Option<Length>) -> FrameAttributes {
        FrameAttributes {
            x,
            y,
            ..Default::default()
        }
    }

    #[test]
    fn move_scales_delta_by_zoom() {
        let session = DragSession::begin(&attrs(Some(10.0.into()), Some(20.0.into())), 2.0);
        let (x, y) = session.position_for(DragDelta { x: 5.0, y: -3.0 });
        assert_eq!((x, y), (20.0, 14.0));
    }

    #[test]
    fn zero_delta_returns_origin() {
        let session = DragSession::begin(&attrs(Some(7.0.into()), Some(9.0.into())), 1.5);
        assert_eq!(session.position_for(DragDelta::default()), (7.0, 9.0));
    }

    #[test]
    fn pixel_strings_are_valid_origins() {
        let session = DragSession::begin(&attrs(Some("12px".into()), Some("4".into())), 1.0);
        assert_eq!(session.origin_x, 12.0);
        assert_eq!(session.origin_y, 4.0);
    }

    #[test]
    fn unset_or_relative_origin_starts_at_zero() {
        let session = DragSession::begin(&attrs(None, Some("50%".into())), 1.0);
        assert_eq!((session.origin_x, session.origin_y), (0.0, 0.0));
    }

    #[test]
    fn patch_writes_numeric_coordinates() {
        let session = DragSession::begin(&attrs(Some(0.0.into()), Some(0.0.into())), 1.0);
        let patch = session.patch_for(DragDelta { x: 3.0, y: 4.0 });
        assert_eq!(patch, FramePatch::new().x(3.0).y(4.0));
    }
}
