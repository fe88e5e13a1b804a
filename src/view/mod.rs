//! TUI rendering and terminal management (impure shell)
//!
//! The picker draws on stderr so that stdout stays free for the selection.

pub mod list_widget;
pub mod styles;

pub use list_widget::ListWidget;
pub use styles::{ColorConfig, ListStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::AppError;
use crate::state::{Outcome, PickerState};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fmt::Display;
use std::io::{self, Stderr};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, T>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    picker: PickerState<T>,
    key_bindings: KeyBindings,
    styles: ListStyles,
}

impl<T: Display> TuiApp<CrosstermBackend<Stderr>, T> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up stderr in raw mode with alternate screen
    pub fn new(picker: PickerState<T>, styles: ListStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        stderr.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stderr))?;
        Self::with_terminal(terminal, picker, styles)
    }
}

impl<B, T> TuiApp<B, T>
where
    B: ratatui::backend::Backend,
    T: Display,
{
    /// Wrap an existing terminal. The list is sized to the terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut picker: PickerState<T>,
        styles: ListStyles,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        picker.resize(size.width, size.height);

        Ok(Self {
            terminal,
            picker,
            key_bindings: KeyBindings::default(),
            styles,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user confirms or aborts. Redraws only after input.
    pub fn run(&mut self) -> Result<Outcome, TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    let outcome = self.handle_key(key);
                    if outcome != Outcome::Continue {
                        return Ok(outcome);
                    }
                }
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }

    /// Route one key event to the picker.
    ///
    /// Release events are ignored. Unbound keys clear the repeat count.
    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if key.kind == KeyEventKind::Release {
            return Outcome::Continue;
        }
        match self.key_bindings.get(key) {
            Some(action) => {
                debug!(?action, "key action");
                self.picker.handle(action)
            }
            None => {
                self.picker.reset_count();
                Outcome::Continue
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        self.picker.resize(width, height);
    }

    /// Draw the list into the whole terminal.
    ///
    /// A zero-sized terminal draws nothing.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            picker,
            styles,
            ..
        } = self;

        terminal.draw(|frame| match picker.list_mut().rows() {
            Ok(rows) => frame.render_widget(ListWidget::new(&rows, *styles), frame.area()),
            Err(err) => warn!("skipping frame: {err}"),
        })?;
        Ok(())
    }

    /// Picker state, for inspection.
    pub fn picker(&self) -> &PickerState<T> {
        &self.picker
    }

    /// The terminal, for inspecting test backends.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Run the picker on stderr until the user confirms or aborts.
///
/// The terminal is restored even when the loop fails.
pub fn run_picker<T: Display>(
    picker: PickerState<T>,
    styles: ListStyles,
) -> Result<Outcome, TuiError> {
    let result = TuiApp::new(picker, styles).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stderr().execute(LeaveAlternateScreen)?;
    Ok(())
}
