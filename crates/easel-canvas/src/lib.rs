//! Frame wrapper synchronisation for the Easel canvas.
//!
//! A [`FrameSyncController`] keeps one embedded frame's wrapper element in
//! step with its [`FrameModel`]: coordinates and dimensions flow model →
//! element, measured dimensions flow back once, drags become model writes,
//! and every settled change ends in one debounced overlay recalculation.
//!
//! Everything the controller touches outside itself is a trait
//! ([`FrameElement`], [`EmbeddedFrame`], [`CanvasHost`], [`DragPrimitive`],
//! [`Clock`]); the [`headless`] module has in-memory implementations.

pub mod clock;
pub mod controller;
pub mod debounce;
pub mod drag;
pub mod element;
pub mod frame;
pub mod headless;
pub mod host;
pub mod model;
pub mod tools;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{FrameAction, FrameCollaborators, FrameSyncController, FrameSyncOptions, SyncState};
pub use debounce::Debouncer;
pub use drag::{DragDelta, DragPrimitive, DragSession, DragSignal, PointerEvent};
pub use element::{FrameElement, StyleProp, TransitionEvent};
pub use frame::EmbeddedFrame;
pub use host::{CanvasHost, RecalcOptions};
pub use model::{ChangeSet, FrameAttributes, FrameModel, FramePatch, ModelEvent, SetOptions};
pub use tools::{ToolNode, ToolsOverlay};
