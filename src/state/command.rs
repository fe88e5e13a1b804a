//! List commands as data, and the pure transition that applies them.
//!
//! A host loop translates its input events into [`Command`]s and threads a
//! [`ListState`] through [`apply`]; rendering is a separate call. Nothing in
//! here performs I/O.

use crate::model::KeyAction;
use crate::state::list_state::ListState;
use crate::view_state::types::{NumberingMode, ViewportDimensions};

/// One state change of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor by a signed number of items.
    Move(isize),
    /// Cursor to the first item.
    Top,
    /// Cursor to the last item.
    Bottom,
    /// Flip the selection of this many items from the cursor.
    ToggleSelect(usize),
    /// Set the selection of `count` items from the cursor.
    MarkSelected {
        /// Number of items, starting at the cursor.
        count: usize,
        /// New selection flag.
        value: bool,
    },
    /// Flip every selection flag.
    InvertSelection,
    /// Sort the items.
    Sort,
    /// Move the item under the cursor by a signed number of positions.
    MoveItem(isize),
    /// Choose the numbering mode.
    SetNumbering(NumberingMode),
    /// Flip the numbering mode.
    ToggleNumbering,
    /// Change the viewport.
    Resize(ViewportDimensions),
}

impl Command {
    /// Commands for a key action given the jump count.
    ///
    /// Returns an empty list for actions that do not change the list
    /// (digits, confirm, quit). Toggling selection also advances the cursor
    /// by one item.
    ///
    /// # Examples
    ///
    /// ```
    /// use wraplist::model::KeyAction;
    /// use wraplist::state::command::Command;
    ///
    /// assert_eq!(Command::for_action(KeyAction::MoveUp, 3), vec![Command::Move(-3)]);
    /// assert_eq!(
    ///     Command::for_action(KeyAction::ToggleSelect, 2),
    ///     vec![Command::ToggleSelect(2), Command::Move(1)]
    /// );
    /// assert!(Command::for_action(KeyAction::Quit, 1).is_empty());
    /// ```
    pub fn for_action(action: KeyAction, count: usize) -> Vec<Command> {
        let signed = isize::try_from(count).unwrap_or(isize::MAX);
        match action {
            KeyAction::MoveDown => vec![Command::Move(signed)],
            KeyAction::MoveUp => vec![Command::Move(-signed)],
            KeyAction::Top => vec![Command::Top],
            KeyAction::Bottom => vec![Command::Bottom],
            KeyAction::ToggleSelect => vec![Command::ToggleSelect(count), Command::Move(1)],
            KeyAction::Mark => vec![Command::MarkSelected { count, value: true }],
            KeyAction::Unmark => vec![Command::MarkSelected {
                count,
                value: false,
            }],
            KeyAction::InvertSelection => vec![Command::InvertSelection],
            KeyAction::Sort => vec![Command::Sort],
            KeyAction::MoveItemUp => vec![Command::MoveItem(-signed)],
            KeyAction::MoveItemDown => vec![Command::MoveItem(signed)],
            KeyAction::ToggleNumbering => vec![Command::ToggleNumbering],
            KeyAction::Digit(_) | KeyAction::Confirm | KeyAction::Quit => Vec::new(),
        }
    }
}

/// Apply `command` to `state` in place.
pub fn execute<T>(state: &mut ListState<T>, command: Command) {
    match command {
        Command::Move(delta) => state.move_by(delta),
        Command::Top => state.top(),
        Command::Bottom => state.bottom(),
        Command::ToggleSelect(count) => state.toggle_select(count),
        Command::MarkSelected { count, value } => state.mark_selected(count, value),
        Command::InvertSelection => state.invert_selection(),
        Command::Sort => state.sort(),
        Command::MoveItem(delta) => state.move_item(delta),
        Command::SetNumbering(mode) => state.set_numbering(mode),
        Command::ToggleNumbering => state.toggle_numbering(),
        Command::Resize(viewport) => state.set_viewport(viewport),
    }
}

/// Pure transition: the state after `command`.
///
/// # Examples
///
/// ```
/// use wraplist::state::command::{apply, Command};
/// use wraplist::state::list_state::ListState;
///
/// let state = ListState::with_items(["a", "b", "c"], 10, 10);
/// let state = apply(state, Command::Bottom);
/// assert_eq!(state.cursor().get(), 2);
/// ```
pub fn apply<T>(mut state: ListState<T>, command: Command) -> ListState<T> {
    execute(&mut state, command);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::types::ItemIndex;

    fn state() -> ListState<String> {
        ListState::with_items(["b", "c", "a"].map(String::from), 20, 10)
    }

    #[test]
    fn commands_fold_over_state() {
        let commands = [
            Command::Move(1),
            Command::ToggleSelect(1),
            Command::Sort,
            Command::MarkSelected {
                count: 1,
                value: true,
            },
        ];
        let state = commands.into_iter().fold(state(), apply);

        assert_eq!(state.cursor(), ItemIndex::new(2));
        let selected: Vec<&String> = state.get_selected();
        assert_eq!(selected, vec!["c"]);
    }

    #[test]
    fn resize_changes_viewport() {
        let state = apply(state(), Command::Resize(ViewportDimensions::new(3, 4)));
        assert_eq!(state.viewport(), ViewportDimensions::new(3, 4));
    }

    #[test]
    fn numbering_commands() {
        let state = apply(state(), Command::ToggleNumbering);
        assert_eq!(state.numbering(), NumberingMode::Relative);
        let state = apply(state, Command::SetNumbering(NumberingMode::Absolute));
        assert_eq!(state.numbering(), NumberingMode::Absolute);
    }

    #[test]
    fn move_item_action_uses_count() {
        assert_eq!(
            Command::for_action(KeyAction::MoveItemUp, 2),
            vec![Command::MoveItem(-2)]
        );
    }

    #[test]
    fn huge_count_saturates() {
        assert_eq!(
            Command::for_action(KeyAction::MoveDown, usize::MAX),
            vec![Command::Move(isize::MAX)]
        );
    }
}
