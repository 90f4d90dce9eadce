//! Configuration schema types for Easel.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod canvas;
mod frame;
mod system;

pub use canvas::*;
pub use frame::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Easel.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EaselConfig {
    pub canvas: CanvasConfig,
    pub frame: FrameConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_sections() {
        let config = EaselConfig::default();
        assert_eq!(config.canvas.style_prefix, "gjs-");
        assert_eq!(config.frame.recalc_debounce_ms, 0);
        assert_eq!(config.frame.transition_fallback_ms, 1000);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: EaselConfig = toml::from_str("").unwrap();
        assert_eq!(config.canvas.style_prefix, "gjs-");
        assert_eq!(config.frame.animation_class, "frame-wrapper--anim");
    }

    #[test]
    fn partial_toml_keeps_other_sections() {
        let toml_str = r#"
[frame]
recalc_debounce_ms = 16

[logging]
level = "DEBUG"
"#;
        let config: EaselConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.frame.recalc_debounce_ms, 16);
        assert_eq!(config.logging.level, LogLevel::Debug);
        // Defaults preserved
        assert_eq!(config.frame.transition_fallback_ms, 1000);
        assert_eq!(config.canvas.style_prefix, "gjs-");
    }
}
