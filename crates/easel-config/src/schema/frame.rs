//! Frame controller configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Frame sync configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Quiet window of the overlay recalculation, in milliseconds
    /// (valid range: 0-1000). `0` runs it on the next tick.
    pub recalc_debounce_ms: u64,
    /// How long to wait for a transition-end signal before committing
    /// anyway, in milliseconds (valid range: 0-10000). `0` waits forever.
    pub transition_fallback_ms: u64,
    /// Class added to the wrapper while a size transition runs, appended
    /// to the canvas style prefix.
    pub animation_class: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            recalc_debounce_ms: 0,
            transition_fallback_ms: 1000,
            animation_class: "frame-wrapper--anim".into(),
        }
    }
}

impl FrameConfig {
    pub fn recalc_debounce(&self) -> Duration {
        Duration::from_millis(self.recalc_debounce_ms)
    }

    pub fn transition_fallback(&self) -> Option<Duration> {
        (self.transition_fallback_ms > 0).then(|| Duration::from_millis(self.transition_fallback_ms))
    }
}
