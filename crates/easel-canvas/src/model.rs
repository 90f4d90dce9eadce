//! The frame model: attributes, patches, and change notifications.
//!
//! Observable writes broadcast a [`ModelEvent::Changed`] to every
//! subscriber; silent writes change the attributes without telling anyone.

use easel_common::types::{FrameId, Length};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

const MODEL_EVENT_CAPACITY: usize = 64;

// =============================================================================
// TYPES
// =============================================================================

/// Attributes of a frame. `None` coordinates and dimensions are unset;
/// unset dimensions are derived from the rendered element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameAttributes {
    pub x: Option<Length>,
    pub y: Option<Length>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub name: String,
}

/// A partial update. Fields left untouched by the builder are not written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePatch {
    x: Option<Option<Length>>,
    y: Option<Option<Length>>,
    width: Option<Option<Length>>,
    height: Option<Option<Length>>,
    name: Option<String>,
}

impl FramePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, value: impl Into<Length>) -> Self {
        self.x = Some(Some(value.into()));
        self
    }

    pub fn y(mut self, value: impl Into<Length>) -> Self {
        self.y = Some(Some(value.into()));
        self
    }

    pub fn width(mut self, value: impl Into<Length>) -> Self {
        self.width = Some(Some(value.into()));
        self
    }

    pub fn height(mut self, value: impl Into<Length>) -> Self {
        self.height = Some(Some(value.into()));
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn unset_x(mut self) -> Self {
        self.x = Some(None);
        self
    }

    pub fn unset_y(mut self) -> Self {
        self.y = Some(None);
        self
    }

    pub fn unset_width(mut self) -> Self {
        self.width = Some(None);
        self
    }

    pub fn unset_height(mut self) -> Self {
        self.height = Some(None);
        self
    }

    /// Fields this patch writes, whether or not the value differs.
    pub fn touched(&self) -> ChangeSet {
        ChangeSet {
            x: self.x.is_some(),
            y: self.y.is_some(),
            width: self.width.is_some(),
            height: self.height.is_some(),
            name: self.name.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.touched().is_empty()
    }
}

/// Options for [`FrameModel::set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Write without broadcasting a change notification.
    pub silent: bool,
}

impl SetOptions {
    pub fn silent() -> Self {
        Self { silent: true }
    }
}

/// Which attributes actually changed in one write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub x: bool,
    pub y: bool,
    pub width: bool,
    pub height: bool,
    pub name: bool,
}

impl ChangeSet {
    /// Every geometry attribute, used to resync after missed notifications.
    pub fn geometry() -> Self {
        Self {
            x: true,
            y: true,
            width: true,
            height: true,
            name: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.x || self.y || self.width || self.height || self.name)
    }

    pub fn position(&self) -> bool {
        self.x || self.y
    }

    pub fn dimensions(&self) -> bool {
        self.width || self.height
    }
}

/// Notification broadcast by a [`FrameModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    /// An observable write changed these attributes.
    Changed(ChangeSet),
    /// The embedded frame finished loading its content.
    Loaded,
}

// =============================================================================
// MODEL
// =============================================================================

/// Mutable frame record shared between the host and the frame's controller.
pub struct FrameModel {
    id: FrameId,
    attrs: FrameAttributes,
    revision: u64,
    loaded: bool,
    events: broadcast::Sender<ModelEvent>,
}

impl FrameModel {
    pub fn new(id: FrameId, attrs: FrameAttributes) -> Self {
        let (events, _) = broadcast::channel(MODEL_EVENT_CAPACITY);
        Self {
            id,
            attrs,
            revision: 0,
            loaded: false,
            events,
        }
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn attributes(&self) -> &FrameAttributes {
        &self.attrs
    }

    pub fn name(&self) -> &str {
        &self.attrs.name
    }

    /// Number of writes that changed at least one attribute, silent or not.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the embedded frame has finished loading at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ModelEvent> {
        self.events.subscribe()
    }

    /// Apply `patch` and return what changed.
    ///
    /// Observable writes that change something broadcast
    /// [`ModelEvent::Changed`]; silent writes never broadcast.
    pub fn set(&mut self, patch: FramePatch, opts: SetOptions) -> ChangeSet {
        let mut changes = ChangeSet::default();

        if let Some(x) = patch.x {
            changes.x = replace_if_changed(&mut self.attrs.x, x);
        }
        if let Some(y) = patch.y {
            changes.y = replace_if_changed(&mut self.attrs.y, y);
        }
        if let Some(width) = patch.width {
            changes.width = replace_if_changed(&mut self.attrs.width, width);
        }
        if let Some(height) = patch.height {
            changes.height = replace_if_changed(&mut self.attrs.height, height);
        }
        if let Some(name) = patch.name {
            changes.name = replace_if_changed(&mut self.attrs.name, name);
        }

        if changes.is_empty() {
            return changes;
        }

        self.revision += 1;
        if opts.silent {
            debug!(frame = %self.id, ?changes, "silent model write");
        } else {
            self.events.send(ModelEvent::Changed(changes)).ok();
        }
        changes
    }

    /// Signal that the embedded frame finished loading.
    pub fn trigger_loaded(&mut self) {
        self.loaded = true;
        self.events.send(ModelEvent::Loaded).ok();
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================
