//! Recording canvas host.

use std::cell::{Cell, RefCell};

use easel_common::types::FrameId;
use serde::Serialize;

use crate::host::{CanvasHost, RecalcOptions};
use crate::tools::ToolsOverlay;

/// One call a controller made into the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    RunDefault { preserve_selected: bool },
    StopDefault { preserve_selected: bool },
    ToggleFramesEvents { enabled: bool },
    AttachTools { frame: FrameId, nodes: usize },
    DetachTools { frame: FrameId },
}

/// A host that records every call and reports a settable zoom.
///
/// Share it between controllers (and the test) through an `Rc`.
#[derive(Debug)]
pub struct HeadlessHost {
    zoom: Cell<f64>,
    frames_events: Cell<bool>,
    calls: RefCell<Vec<HostCall>>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            zoom: Cell::new(1.0),
            frames_events: Cell::new(true),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn set_zoom_multiplier(&self, zoom: f64) {
        self.zoom.set(zoom);
    }

    /// Whether frames currently receive pointer events.
    pub fn frames_events_enabled(&self) -> bool {
        self.frames_events.get()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    /// Drain the recorded calls.
    pub fn take_calls(&self) -> Vec<HostCall> {
        self.calls.take()
    }

    pub fn run_default_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, HostCall::RunDefault { .. }))
            .count()
    }

    fn record(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasHost for HeadlessHost {
    fn zoom_multiplier(&self) -> f64 {
        self.zoom.get()
    }

    fn run_default(&self, opts: RecalcOptions) {
        self.record(HostCall::RunDefault {
            preserve_selected: opts.preserve_selected,
        });
    }

    fn stop_default(&self, opts: RecalcOptions) {
        self.record(HostCall::StopDefault {
            preserve_selected: opts.preserve_selected,
        });
    }

    fn toggle_frames_events(&self, enabled: bool) {
        self.frames_events.set(enabled);
        self.record(HostCall::ToggleFramesEvents { enabled });
    }

    fn attach_tools(&self, frame: FrameId, tools: &ToolsOverlay) {
        self.record(HostCall::AttachTools {
            frame,
            nodes: tools.node_count(),
        });
    }

    fn detach_tools(&self, frame: FrameId) {
        self.record(HostCall::DetachTools { frame });
    }
}
