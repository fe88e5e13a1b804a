//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod item;
pub mod key_action;

// Re-export for convenience
pub use error::{AppError, InputError, RenderError};
pub use item::{Entry, ItemEquality, ItemStore};
pub use key_action::KeyAction;
