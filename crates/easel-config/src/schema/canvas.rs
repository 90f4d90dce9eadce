//! Canvas-wide configuration types.

use serde::{Deserialize, Serialize};

/// Canvas configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Prefix for every class name the canvas writes (`gjs-frame-wrapper`,
    /// `gjs-highlighter`, ...). Letters, digits, `-` and `_` only.
    pub style_prefix: String,
    /// Capacity of the canvas event bus.
    pub bus_capacity: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            style_prefix: "gjs-".into(),
            bus_capacity: 64,
        }
    }
}
