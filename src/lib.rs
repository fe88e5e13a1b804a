//! wraplist
//!
//! A selectable, scrollable, soft-wrapping list for terminals, plus an
//! interactive picker built on it.
//!
//! The core ([`state::ListState`] and everything below it) is pure: it
//! turns items, a cursor and a viewport size into terminal text. The
//! [`view`] module is the impure shell that drives it from a real
//! terminal.
//!
//! ```
//! use wraplist::state::ListState;
//!
//! let mut list = ListState::with_items(["alpha", "beta"], 20, 5);
//! list.move_by(1);
//! assert_eq!(list.render().unwrap(), "0 ╭ alpha\n\x1b[7m1 ╭>beta\x1b[0m");
//! ```

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod text;
pub mod view;
pub mod view_state;

// Input splitting and output formatting
pub mod integration;
