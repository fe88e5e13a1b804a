//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor motion
    /// Move the cursor down by the jump count. Default: j/↓
    MoveDown,
    /// Move the cursor up by the jump count. Default: k/↑
    MoveUp,
    /// Jump to the first item. Default: g/Home
    Top,
    /// Jump to the last item. Default: G/End
    Bottom,

    // Selection
    /// Toggle selection of `count` items at the cursor, then move down. Default: Space
    ToggleSelect,
    /// Mark `count` items from the cursor as selected. Default: m
    Mark,
    /// Unmark `count` items from the cursor. Default: M
    Unmark,
    /// Flip the selection of every item. Default: v
    InvertSelection,

    // Ordering
    /// Sort items by display text. Default: s
    Sort,
    /// Swap the item under the cursor with the one above. Default: -
    MoveItemUp,
    /// Swap the item under the cursor with the one below. Default: +
    MoveItemDown,

    // Display
    /// Switch between absolute and relative line numbers. Default: r
    ToggleNumbering,

    /// Append a digit to the jump buffer. Field: digit value (0-9)
    Digit(u8),

    // Application
    /// Accept the selection and exit. Default: Enter
    Confirm,
    /// Exit without output. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// True for actions that consume the jump buffer as a repeat count.
    pub fn takes_count(self) -> bool {
        matches!(
            self,
            KeyAction::MoveDown
                | KeyAction::MoveUp
                | KeyAction::ToggleSelect
                | KeyAction::Mark
                | KeyAction::Unmark
                | KeyAction::MoveItemUp
                | KeyAction::MoveItemDown
        )
    }
}
