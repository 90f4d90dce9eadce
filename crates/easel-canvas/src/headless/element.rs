//! In-memory wrapper element.

use std::collections::HashMap;
use std::time::Duration;

use easel_common::types::Length;

use crate::element::{FrameElement, StyleProp};

/// Default size of an unsized embedded frame.
const INTRINSIC_SIZE: (f64, f64) = (300.0, 150.0);

/// An element that lays itself out from its inline pixel styles, falling
/// back to an intrinsic content size.
#[derive(Debug, Clone)]
pub struct HeadlessElement {
    styles: HashMap<StyleProp, String>,
    classes: Vec<String>,
    intrinsic: (f64, f64),
    transition: Duration,
}

impl HeadlessElement {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
            classes: Vec::new(),
            intrinsic: INTRINSIC_SIZE,
            transition: Duration::ZERO,
        }
    }

    /// Size used for any dimension without a pixel style.
    pub fn with_intrinsic_size(mut self, width: f64, height: f64) -> Self {
        self.intrinsic = (width, height);
        self
    }

    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.transition = duration;
        self
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    fn rendered(&self, prop: StyleProp, fallback: f64) -> f64 {
        self.styles
            .get(&prop)
            .and_then(|css| Length::Raw(css.clone()).as_px())
            .unwrap_or(fallback)
    }
}

impl Default for HeadlessElement {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameElement for HeadlessElement {
    fn style(&self, prop: StyleProp) -> String {
        self.styles.get(&prop).cloned().unwrap_or_default()
    }

    fn set_style(&mut self, prop: StyleProp, value: &str) {
        if value.is_empty() {
            self.styles.remove(&prop);
        } else {
            self.styles.insert(prop, value.to_string());
        }
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name.split_whitespace().map(str::to_string).collect();
    }

    fn offset_size(&self) -> (f64, f64) {
        (
            self.rendered(StyleProp::Width, self.intrinsic.0),
            self.rendered(StyleProp::Height, self.intrinsic.1),
        )
    }

    fn transition_duration(&self) -> Duration {
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsized_element_reports_intrinsic_size() {
        let el = HeadlessElement::new();
        assert_eq!(el.offset_size(), (300.0, 150.0));
    }

    #[test]
    fn pixel_styles_drive_layout() {
        let mut el = HeadlessElement::new().with_intrinsic_size(1024.0, 768.0);
        el.set_style(StyleProp::Width, "320px");
        el.set_style(StyleProp::Height, "50%");
        assert_eq!(el.offset_size(), (320.0, 768.0));
    }

    #[test]
    fn empty_style_clears_property() {
        let mut el = HeadlessElement::new();
        el.set_style(StyleProp::Left, "10px");
        el.set_style(StyleProp::Left, "");
        assert_eq!(el.style(StyleProp::Left), "");
    }

    #[test]
    fn classes_are_a_set() {
        let mut el = HeadlessElement::new();
        el.set_class_name("gjs-frame-wrapper");
        el.add_class("anim");
        el.add_class("anim");
        assert_eq!(el.class_name(), "gjs-frame-wrapper anim");
        el.remove_class("anim");
        el.remove_class("anim");
        assert!(!el.has_class("anim"));
        assert!(el.has_class("gjs-frame-wrapper"));
    }
}
