pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, EaselError, ScenarioError};
pub use events::{Event, EventBus};
pub use types::{FrameId, Length, NodeRef, WindowRef};

pub type Result<T> = std::result::Result<T, EaselError>;
