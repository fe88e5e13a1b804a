//! Numeric prefix typed before a motion (`12j` moves twelve items).

/// Accumulates digits until a motion consumes them as a repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JumpBuffer {
    value: Option<usize>,
}

impl JumpBuffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decimal digit. Values above 9 are ignored; overflow saturates.
    pub fn push_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        let current = self.value.unwrap_or(0);
        self.value = Some(
            current
                .saturating_mul(10)
                .saturating_add(usize::from(digit)),
        );
    }

    /// Count typed so far, if any.
    pub fn peek(&self) -> Option<usize> {
        self.value
    }

    /// True when no digit has been typed.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Consume the count. 1 when nothing was typed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::state::jump_buffer::JumpBuffer;
    /// let mut jump = JumpBuffer::new();
    /// assert_eq!(jump.take(), 1);
    /// jump.push_digit(1);
    /// jump.push_digit(2);
    /// assert_eq!(jump.take(), 12);
    /// assert!(jump.is_empty());
    /// ```
    pub fn take(&mut self) -> usize {
        self.value.take().unwrap_or(1)
    }

    /// Forget any typed digits.
    pub fn clear(&mut self) {
        self.value = None;
    }
}
