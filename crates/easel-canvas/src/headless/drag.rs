//! Drag primitive that only records where drags were started.

use std::cell::RefCell;
use std::rc::Rc;

use crate::drag::{DragPrimitive, PointerEvent};

/// Clones share the record of started drags.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDrag {
    started: Rc<RefCell<Vec<PointerEvent>>>,
}

impl HeadlessDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> Vec<PointerEvent> {
        self.started.borrow().clone()
    }

    /// Take the oldest start not yet consumed.
    pub fn take_started(&self) -> Option<PointerEvent> {
        let mut started = self.started.borrow_mut();
        (!started.is_empty()).then(|| started.remove(0))
    }
}

impl DragPrimitive for HeadlessDrag {
    fn start(&mut self, origin: &PointerEvent) {
        self.started.borrow_mut().push(*origin);
    }
}
