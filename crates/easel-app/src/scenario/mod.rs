//! Scenario files: a frame, its environment, and a list of steps to replay
//! through a controller wired to headless collaborators.
//!
//! ```json
//! {
//!   "frame": { "x": 0, "y": 0, "name": "Desktop" },
//!   "content_size": [1024, 768],
//!   "transition_ms": 300,
//!   "zoom": 2,
//!   "steps": [
//!     { "op": "loaded" },
//!     { "op": "drag_start", "at": [10, 10] },
//!     { "op": "drag_move", "dx": 5, "dy": -3 },
//!     { "op": "drag_end" },
//!     { "op": "advance", "ms": 300 }
//!   ]
//! }
//! ```

mod patch;
mod runner;

#[cfg(test)]
mod tests;

pub use runner::run;

use std::path::Path;

use easel_canvas::FrameAttributes;
use easel_common::ScenarioError;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub frame: FrameAttributes,
    /// Size the content lays out at when the wrapper has no pixel size.
    #[serde(default)]
    pub content_size: Option<[f64; 2]>,
    /// Duration of the wrapper's size transition; 0 means none.
    #[serde(default)]
    pub transition_ms: u64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    pub steps: Vec<Step>,
}

fn default_zoom() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Write attributes to the model. `null` unsets, numbers are pixels,
    /// strings are CSS lengths.
    Set {
        values: Map<String, Value>,
        #[serde(default)]
        silent: bool,
    },
    Loaded,
    Render,
    DragStart {
        #[serde(default)]
        at: Option<[f64; 2]>,
    },
    DragMove {
        dx: f64,
        dy: f64,
    },
    DragEnd,
    TransitionEnd {
        #[serde(default)]
        event: Option<String>,
    },
    Scroll,
    Advance {
        ms: u64,
    },
    Remove,
}

impl Step {
    pub fn op(&self) -> &'static str {
        match self {
            Step::Set { .. } => "set",
            Step::Loaded => "loaded",
            Step::Render => "render",
            Step::DragStart { .. } => "drag_start",
            Step::DragMove { .. } => "drag_move",
            Step::DragEnd => "drag_end",
            Step::TransitionEnd { .. } => "transition_end",
            Step::Scroll => "scroll",
            Step::Advance { .. } => "advance",
            Step::Remove => "remove",
        }
    }
}

pub fn parse_scenario(json: &str) -> Result<Scenario, ScenarioError> {
    serde_json::from_str(json).map_err(|e| ScenarioError::ParseError(e.to_string()))
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    if !path.exists() {
        return Err(ScenarioError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ScenarioError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    parse_scenario(&content)
}
