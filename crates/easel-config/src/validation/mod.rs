//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod canvas;
mod frame;
mod helpers;


use crate::schema::EaselConfig;
use easel_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EaselConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    canvas::validate_canvas(&mut errors, config);
    frame::validate_frame(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
