use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub u32);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame-{}", self.0)
    }
}

/// Handle to the content root (`body`) of an embedded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef(pub u64);

/// Handle to the viewport window of an embedded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRef(pub u64);

/// A coordinate or dimension as stored on a frame model.
///
/// Numbers are pixels; strings are already-formatted CSS lengths
/// (`"50%"`, `"12em"`, `"auto"`) and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Px(f64),
    Raw(String),
}

impl Length {
    /// CSS text for a style property.
    pub fn to_css(&self) -> String {
        match self {
            Length::Px(v) => format!("{v}px"),
            Length::Raw(s) => s.clone(),
        }
    }

    /// Pixel value, if this length has one.
    ///
    /// Raw strings count only when they are a bare number or end in `px`.
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Length::Px(v) => Some(*v),
            Length::Raw(s) => {
                let s = s.trim();
                s.strip_suffix("px").unwrap_or(s).trim().parse::<f64>().ok()
            }
        }
    }
}

/// CSS text for an optional length; `None` clears the property.
pub fn css_or_empty(value: Option<&Length>) -> String {
    value.map(Length::to_css).unwrap_or_default()
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<f64> for Length {
    fn from(v: f64) -> Self {
        Length::Px(v)
    }
}

impl From<&str> for Length {
    fn from(s: &str) -> Self {
        Length::Raw(s.to_string())
    }
}

impl From<String> for Length {
    fn from(s: String) -> Self {
        Length::Raw(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_id_display() {
        assert_eq!(FrameId(42).to_string(), "frame-42");
    }

    #[test]
    fn frame_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(FrameId(1));
        set.insert(FrameId(2));
        set.insert(FrameId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn numeric_length_formats_as_pixels() {
        for v in [0.0, 10.0, -3.0, 10.5, 1920.0] {
            assert_eq!(Length::Px(v).to_css(), format!("{v}px"));
        }
        assert_eq!(Length::Px(10.0).to_css(), "10px");
        assert_eq!(Length::Px(10.5).to_css(), "10.5px");
    }

    #[test]
    fn string_length_passes_through() {
        for s in ["50%", "12em", "auto", "10px", "calc(100% - 4px)", "nonsense"] {
            assert_eq!(Length::from(s).to_css(), s);
        }
    }

    #[test]
    fn css_or_empty_clears_missing_values() {
        assert_eq!(css_or_empty(None), "");
        assert_eq!(css_or_empty(Some(&Length::Px(3.0))), "3px");
    }

    #[test]
    fn as_px_reads_pixel_strings() {
        assert_eq!(Length::Px(4.0).as_px(), Some(4.0));
        assert_eq!(Length::from("12px").as_px(), Some(12.0));
        assert_eq!(Length::from(" 7 ").as_px(), Some(7.0));
        assert_eq!(Length::from("50%").as_px(), None);
        assert_eq!(Length::from("auto").as_px(), None);
    }

    #[test]
    fn length_deserializes_untagged() {
        let n: Length = serde_json::from_str("120").unwrap();
        assert_eq!(n, Length::Px(120.0));
        let s: Length = serde_json::from_str("\"100%\"").unwrap();
        assert_eq!(s, Length::Raw("100%".into()));
    }
}
