//! Controller state, options, and construction.

use std::rc::Rc;
use std::time::{Duration, Instant};

use easel_common::events::EventBus;
use easel_common::types::FrameId;
use easel_config::EaselConfig;
use tokio::sync::broadcast;
use tracing::debug;

use super::position::PositionOrigin;
use crate::clock::Clock;
use crate::debounce::Debouncer;
use crate::drag::{DragPrimitive, DragSession};
use crate::element::FrameElement;
use crate::frame::EmbeddedFrame;
use crate::host::CanvasHost;
use crate::model::{FrameModel, ModelEvent};
use crate::tools::ToolsOverlay;

// =============================================================================
// OPTIONS
// =============================================================================

/// Per-controller settings, usually derived from [`EaselConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSyncOptions {
    pub style_prefix: String,
    pub recalc_debounce: Duration,
    /// Commit anyway if no transition-end signal arrives within this
    /// long. `None` waits indefinitely.
    pub transition_fallback: Option<Duration>,
    pub animation_class: String,
}

impl FrameSyncOptions {
    pub fn from_config(config: &EaselConfig) -> Self {
        Self {
            style_prefix: config.canvas.style_prefix.clone(),
            recalc_debounce: config.frame.recalc_debounce(),
            transition_fallback: config.frame.transition_fallback(),
            animation_class: config.frame.animation_class.clone(),
        }
    }

    /// Prefixed class marking a running size transition.
    pub fn anim_class(&self) -> String {
        format!("{}{}", self.style_prefix, self.animation_class)
    }

    pub fn wrapper_class(&self) -> String {
        format!("{}frame-wrapper", self.style_prefix)
    }
}

impl Default for FrameSyncOptions {
    fn default() -> Self {
        Self::from_config(&EaselConfig::default())
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Resting state of the dimension sync.
///
/// `Applying` and `CommitNow` only exist inside a single dimension update,
/// so the controller never rests in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    /// A size change is animating; the commit waits for transition end.
    AnimatingWait { since: Instant },
}

/// Hooks on the wrapper element that trigger controller actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    /// `click` on `[data-action-remove]`.
    Remove,
    /// `mousedown` on `[data-action-move]`.
    Move,
}

impl FrameAction {
    /// Parse the value of a `data-action-*` hook.
    pub fn from_hook(hook: &str) -> Option<Self> {
        match hook {
            "remove" => Some(FrameAction::Remove),
            "move" => Some(FrameAction::Move),
            _ => None,
        }
    }
}

/// Everything a controller talks to besides the model.
pub struct FrameCollaborators {
    pub element: Box<dyn FrameElement>,
    pub frame: Box<dyn EmbeddedFrame>,
    pub host: Rc<dyn CanvasHost>,
    pub drag: Box<dyn DragPrimitive>,
    pub bus: EventBus,
    pub clock: Rc<dyn Clock>,
}

/// Keeps one frame wrapper in sync with its model.
pub struct FrameSyncController {
    pub(super) id: FrameId,
    pub(super) element: Box<dyn FrameElement>,
    pub(super) frame: Box<dyn EmbeddedFrame>,
    pub(super) host: Rc<dyn CanvasHost>,
    pub(super) drag: Box<dyn DragPrimitive>,
    pub(super) bus: EventBus,
    pub(super) clock: Rc<dyn Clock>,
    pub(super) options: FrameSyncOptions,
    pub(super) anim_class: String,
    pub(super) model_rx: broadcast::Receiver<ModelEvent>,
    pub(super) commit: Debouncer,
    pub(super) sync: SyncState,
    pub(super) session: Option<DragSession>,
    pub(super) scroll_attached: bool,
    pub(super) tools: Option<ToolsOverlay>,
    pub(super) removed: bool,
}

impl FrameSyncController {
    /// Subscribe to `model` and place the element at its coordinates.
    ///
    /// The initial placement does not schedule a commit.
    pub fn new(model: &FrameModel, parts: FrameCollaborators, options: FrameSyncOptions) -> Self {
        let mut controller = Self {
            id: model.id(),
            element: parts.element,
            frame: parts.frame,
            host: parts.host,
            drag: parts.drag,
            bus: parts.bus,
            clock: parts.clock,
            anim_class: options.anim_class(),
            commit: Debouncer::new(options.recalc_debounce),
            options,
            model_rx: model.subscribe(),
            sync: SyncState::Idle,
            session: None,
            scroll_attached: false,
            tools: None,
            removed: false,
        };
        controller.update_position(model, PositionOrigin::Initial);
        debug!(frame = %controller.id, "frame controller created");
        controller
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn options(&self) -> &FrameSyncOptions {
        &self.options
    }

    pub fn element(&self) -> &dyn FrameElement {
        self.element.as_ref()
    }

    pub fn sync_state(&self) -> SyncState {
        self.sync
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.sync, SyncState::AnimatingWait { .. })
    }

    pub fn commit_pending(&self) -> bool {
        self.commit.is_pending()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn tools(&self) -> Option<&ToolsOverlay> {
        self.tools.as_ref()
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }
}
