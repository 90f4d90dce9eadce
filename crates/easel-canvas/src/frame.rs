//! The embedded frame rendered inside a wrapper.

use easel_common::types::{NodeRef, WindowRef};

/// The frame view whose content the wrapper hosts.
///
/// Rendering of the embedded document itself happens behind this trait.
pub trait EmbeddedFrame {
    fn render(&mut self);

    /// Drop the cached bounding rectangle so the next reader re-measures.
    fn invalidate_rect(&mut self);

    /// Content root of the embedded document.
    fn body(&self) -> NodeRef;

    /// Viewport window of the embedded document.
    fn window(&self) -> WindowRef;

    fn remove(&mut self);
}
