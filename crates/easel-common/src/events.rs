use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{FrameId, NodeRef, WindowRef};

/// Events published on the canvas-wide bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    FrameLoaded(FrameId),
    FrameRemoved(FrameId),
    /// `frame:scroll`: the embedded viewport of `frame` scrolled.
    FrameScroll {
        frame: FrameId,
        body: NodeRef,
        target: WindowRef,
    },
    #[serde(other)]
    Unknown,
}

impl Event {
    /// Bus name of the event, as external listeners know it.
    pub fn name(&self) -> &'static str {
        match self {
            Event::FrameLoaded(_) => "frame:loaded",
            Event::FrameRemoved(_) => "frame:removed",
            Event::FrameScroll { .. } => "frame:scroll",
            Event::Unknown => "unknown",
        }
    }
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
