//! Canvas configuration validation (style prefix, bus).

use crate::schema::EaselConfig;

use super::helpers::{validate_class_fragment, validate_range};

pub(crate) fn validate_canvas(errors: &mut Vec<String>, config: &EaselConfig) {
    validate_class_fragment(
        errors,
        "canvas.style_prefix",
        &config.canvas.style_prefix,
        true,
    );
    validate_range(
        errors,
        "canvas.bus_capacity",
        u64::from(config.canvas.bus_capacity),
        1,
        4096,
    );
}
