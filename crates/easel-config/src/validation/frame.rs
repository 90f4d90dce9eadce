//! Frame sync validation (debounce window, transition fallback, classes).

use crate::schema::EaselConfig;

use super::helpers::{validate_class_fragment, validate_range};

pub(crate) fn validate_frame(errors: &mut Vec<String>, config: &EaselConfig) {
    validate_range(
        errors,
        "frame.recalc_debounce_ms",
        config.frame.recalc_debounce_ms,
        0,
        1000,
    );
    validate_range(
        errors,
        "frame.transition_fallback_ms",
        config.frame.transition_fallback_ms,
        0,
        10_000,
    );
    validate_class_fragment(
        errors,
        "frame.animation_class",
        &config.frame.animation_class,
        false,
    );
}
