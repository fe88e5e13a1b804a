//! Picker state and transitions.
//!
//! PickerState is the root state of the picker program: one list plus the
//! jump buffer. Key actions go in, an [`Outcome`] comes out. Nothing here
//! touches the terminal, so every transition is testable directly.

use std::fmt::Display;

use tracing::debug;

use crate::integration::format_selection;
use crate::model::KeyAction;
use crate::state::command::{execute, Command};
use crate::state::jump_buffer::JumpBuffer;
use crate::state::list_state::ListState;
use crate::view_state::types::ViewportDimensions;

// ===== Outcome =====

/// What the host loop should do after a key action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep running.
    Continue,
    /// Exit and print this text (the selected items, one per line).
    Confirm(String),
    /// Exit without output.
    Abort,
}

// ===== PickerState =====

/// Picker state. Owns the list and the pending repeat count.
///
/// # State Machine
///
/// - Digits accumulate in the jump buffer.
/// - A counted action (move, toggle, mark, move item) consumes the buffer.
/// - Any other action clears it.
/// - Confirm and Quit end the interaction.
#[derive(Debug)]
pub struct PickerState<T> {
    list: ListState<T>,
    jump: JumpBuffer,
}

impl<T: Display> PickerState<T> {
    /// Wrap a list.
    pub fn new(list: ListState<T>) -> Self {
        Self {
            list,
            jump: JumpBuffer::new(),
        }
    }

    /// The list being picked from.
    pub fn list(&self) -> &ListState<T> {
        &self.list
    }

    /// Mutable access for rendering.
    pub fn list_mut(&mut self) -> &mut ListState<T> {
        &mut self.list
    }

    /// Pending repeat count.
    pub fn jump(&self) -> JumpBuffer {
        self.jump
    }

    /// Drop the pending repeat count (an unbound key was pressed).
    pub fn reset_count(&mut self) {
        self.jump.clear();
    }

    /// Follow a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        execute(
            &mut self.list,
            Command::Resize(ViewportDimensions::new(width, height)),
        );
    }

    /// Apply one key action.
    pub fn handle(&mut self, action: KeyAction) -> Outcome {
        match action {
            KeyAction::Digit(digit) => {
                self.jump.push_digit(digit);
                return Outcome::Continue;
            }
            KeyAction::Quit => {
                self.jump.clear();
                debug!("picker aborted");
                return Outcome::Abort;
            }
            KeyAction::Confirm => {
                self.jump.clear();
                let selected = self.list.get_selected();
                debug!(selected = selected.len(), "picker confirmed");
                return Outcome::Confirm(format_selection(&selected));
            }
            _ => {}
        }

        let count = if action.takes_count() {
            self.jump.take()
        } else {
            self.jump.clear();
            1
        };
        for command in Command::for_action(action, count) {
            execute(&mut self.list, command);
        }
        Outcome::Continue
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
