//! List state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod command;
pub mod jump_buffer;
pub mod list_state;

// Re-export for convenience
pub use app_state::{Outcome, PickerState};
pub use command::{apply, Command};
pub use jump_buffer::JumpBuffer;
pub use list_state::ListState;
