//! State Management
//!
//! Global application state and the persisted login session.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::Session;
