//! The wrapper element a controller positions and sizes.

use std::fmt;
use std::time::Duration;

/// Inline style properties the controller writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Left,
    Top,
    Width,
    Height,
}

impl StyleProp {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProp::Left => "left",
            StyleProp::Top => "top",
            StyleProp::Width => "width",
            StyleProp::Height => "height",
        }
    }
}

impl fmt::Display for StyleProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Vendor variants of the transition-completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    TransitionEnd,
    OTransitionEnd,
    WebkitTransitionEnd,
}

impl TransitionEvent {
    pub const ALL: [TransitionEvent; 3] = [
        TransitionEvent::TransitionEnd,
        TransitionEvent::OTransitionEnd,
        TransitionEvent::WebkitTransitionEnd,
    ];

    pub fn dom_name(self) -> &'static str {
        match self {
            TransitionEvent::TransitionEnd => "transitionend",
            TransitionEvent::OTransitionEnd => "oTransitionEnd",
            TransitionEvent::WebkitTransitionEnd => "webkitTransitionEnd",
        }
    }

    /// Parse a DOM event name; `None` for anything that is not a
    /// transition-end variant.
    pub fn from_dom_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.dom_name() == name)
    }
}

/// A DOM-like element owned by one controller.
///
/// Style values are CSS text; an empty string means the property is unset.
pub trait FrameElement {
    fn style(&self, prop: StyleProp) -> String;
    fn set_style(&mut self, prop: StyleProp, value: &str);

    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Replace the whole class list.
    fn set_class_name(&mut self, class_name: &str);

    /// Rendered size in pixels (`offsetWidth`, `offsetHeight`).
    fn offset_size(&self) -> (f64, f64);

    /// Computed transition duration of the size properties. Zero means a
    /// size change completes immediately.
    fn transition_duration(&self) -> Duration;
}
