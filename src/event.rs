//! Keyboard event handling.
//!
//! Main menu:
//! - `j`/`k` or arrows: move the highlight
//! - `Enter`: run the highlighted operation
//! - `t`: switch codon table (reference / standard)
//! - `q` or `Esc`: quit
//!
//! Prompt:
//! - typing edits the field, `Enter` confirms, `Esc` goes back
//!
//! Result viewer:
//! - `j`/`k` or arrows: scroll one line
//! - `PageUp`/`PageDown`, `Ctrl+U`/`Ctrl+D`: scroll one page
//! - `g`/`G`: top / bottom
//! - `w`: export the report to a file
//! - `q` or `Esc`: back to the menu
//!
//! `Ctrl+C` quits from anywhere.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::model::{AppState, Screen};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Move menu highlight up
    MenuUp,
    /// Move menu highlight down
    MenuDown,
    /// Run the highlighted menu entry
    MenuSelect,
    /// Switch codon table
    ToggleTable,
    /// Add character to the prompt field
    PromptChar(char),
    /// Backspace in the prompt field
    PromptBackspace,
    /// Confirm the prompt field
    PromptSubmit,
    /// Return to the main menu
    Back,
    /// Scroll the viewer by a number of lines
    Scroll(isize),
    /// Scroll one page up
    PageUp,
    /// Scroll one page down
    PageDown,
    /// Jump to the first line
    ScrollTop,
    /// Jump to the last line
    ScrollBottom,
    /// Export the displayed report
    Export,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on the current screen.
pub fn handle_event(event: Event, screen: &Screen) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key_event(key_event, screen)
        }
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current screen.
fn handle_key_event(key: KeyEvent, screen: &Screen) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match screen {
        Screen::Menu => handle_menu(key),
        Screen::Prompt(_) => handle_prompt(key),
        Screen::Results(_) => handle_results(key),
    }
}

fn handle_menu(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => Action::MenuUp,
        KeyCode::Char('j') | KeyCode::Down => Action::MenuDown,
        KeyCode::Enter => Action::MenuSelect,
        KeyCode::Char('t') => Action::ToggleTable,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn handle_prompt(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::PromptSubmit,
        KeyCode::Esc => Action::Back,
        KeyCode::Backspace => Action::PromptBackspace,
        KeyCode::Char(c) => Action::PromptChar(c),
        _ => Action::None,
    }
}

fn handle_results(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => Action::PageUp,
            KeyCode::Char('d') => Action::PageDown,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('k') | KeyCode::Up => Action::Scroll(-1),
        KeyCode::Char('j') | KeyCode::Down => Action::Scroll(1),
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Char('g') | KeyCode::Home => Action::ScrollTop,
        KeyCode::Char('G') | KeyCode::End => Action::ScrollBottom,
        KeyCode::Char('w') => Action::Export,
        KeyCode::Char('q') | KeyCode::Esc => Action::Back,
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::MenuUp => {
            state.menu_up();
        }
        Action::MenuDown => {
            state.menu_down();
        }
        Action::MenuSelect => {
            state.select_menu_item();
        }
        Action::ToggleTable => {
            state.toggle_table();
        }
        Action::PromptChar(c) => {
            state.prompt_input(c);
        }
        Action::PromptBackspace => {
            state.prompt_backspace();
        }
        Action::PromptSubmit => {
            state.submit_prompt();
        }
        Action::Back => {
            state.back_to_menu();
        }
        Action::Scroll(delta) => {
            state.scroll_by(delta);
        }
        Action::PageUp => {
            state.page_up();
        }
        Action::PageDown => {
            state.page_down();
        }
        Action::ScrollTop => {
            state.scroll_top();
        }
        Action::ScrollBottom => {
            state.scroll_bottom();
        }
        Action::Export => {
            state.export_results();
        }
        Action::Resize(_, _) => {
            // Viewport is resized by the controller before the action is applied
        }
    }

    !state.should_quit
}
