use easel_canvas::FramePatch;
use easel_common::{Length, ScenarioError};
use serde_json::{Map, Value};

/// Build a model patch from a step's `values` object.
pub(super) fn patch_from_values(
    index: usize,
    values: &Map<String, Value>,
) -> Result<FramePatch, ScenarioError> {
    let invalid = |reason: String| ScenarioError::InvalidStep { index, reason };

    let mut patch = FramePatch::new();
    for (key, value) in values {
        if key == "name" {
            let Value::String(name) = value else {
                return Err(invalid(format!("name must be a string, got {value}")));
            };
            patch = patch.name(name.clone());
            continue;
        }

        let length = length_from_value(value)
            .ok_or_else(|| invalid(format!("{key}: expected number, string or null, got {value}")))?;
        patch = match (key.as_str(), length) {
            ("x", Some(v)) => patch.x(v),
            ("x", None) => patch.unset_x(),
            ("y", Some(v)) => patch.y(v),
            ("y", None) => patch.unset_y(),
            ("width", Some(v)) => patch.width(v),
            ("width", None) => patch.unset_width(),
            ("height", Some(v)) => patch.height(v),
            ("height", None) => patch.unset_height(),
            _ => return Err(invalid(format!("unknown attribute '{key}'"))),
        };
    }
    Ok(patch)
}

/// `Some(None)` for null, `None` when the value is not a length at all.
fn length_from_value(value: &Value) -> Option<Option<Length>> {
    match value {
        Value::Null => Some(None),
        Value::Number(n) => n.as_f64().map(|v| Some(Length::Px(v))),
        Value::String(s) => Some(Some(Length::Raw(s.clone()))),
        _ => None,
    }
}
