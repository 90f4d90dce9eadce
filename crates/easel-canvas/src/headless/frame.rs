//! In-memory embedded frame.

use std::cell::RefCell;
use std::rc::Rc;

use easel_common::types::{NodeRef, WindowRef};

use crate::frame::EmbeddedFrame;

#[derive(Debug, Default)]
struct FrameState {
    rendered: bool,
    removed: bool,
    rect_invalidations: u32,
}

/// Embedded frame stand-in. Clones observe the same state.
#[derive(Debug, Clone)]
pub struct HeadlessFrame {
    body: NodeRef,
    window: WindowRef,
    state: Rc<RefCell<FrameState>>,
}

impl HeadlessFrame {
    pub fn new(body: NodeRef, window: WindowRef) -> Self {
        Self {
            body,
            window,
            state: Rc::default(),
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.state.borrow().rendered
    }

    pub fn is_removed(&self) -> bool {
        self.state.borrow().removed
    }

    /// How often the cached rectangle was dropped.
    pub fn rect_invalidations(&self) -> u32 {
        self.state.borrow().rect_invalidations
    }
}

impl EmbeddedFrame for HeadlessFrame {
    fn render(&mut self) {
        self.state.borrow_mut().rendered = true;
    }

    fn invalidate_rect(&mut self) {
        self.state.borrow_mut().rect_invalidations += 1;
    }

    fn body(&self) -> NodeRef {
        self.body
    }

    fn window(&self) -> WindowRef {
        self.window
    }

    fn remove(&mut self) {
        let mut state = self.state.borrow_mut();
        state.rendered = false;
        state.removed = true;
    }
}
