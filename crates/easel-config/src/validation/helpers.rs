//! Shared validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not usable inside a CSS class name.
pub(crate) fn validate_class_fragment(errors: &mut Vec<String>, name: &str, value: &str, allow_empty: bool) {
    if value.is_empty() {
        if !allow_empty {
            errors.push(format!("{name} must not be empty"));
        }
        return;
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        errors.push(format!("{name} = {value:?} contains invalid character {bad:?}"));
    }
}
