//! In-memory collaborators for running a controller without a browser.
//!
//! Used by the scenario runner and by tests. Handles that need to be
//! inspected after being handed to a controller (`HeadlessFrame`,
//! `HeadlessHost`, `HeadlessDrag`) share their state between clones.

mod drag;
mod element;
mod frame;
mod host;

pub use drag::HeadlessDrag;
pub use element::HeadlessElement;
pub use frame::HeadlessFrame;
pub use host::{HeadlessHost, HostCall};
