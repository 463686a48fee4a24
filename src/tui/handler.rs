//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, FocusedPanel, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        KeyCode::Tab | KeyCode::BackTab => app.toggle_panel_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        // Category selection
        KeyCode::Char(' ') | KeyCode::Enter if app.focused_panel == FocusedPanel::Sidebar => {
            app.toggle_current_category();
        }
        KeyCode::Char('a') => app.select_all_categories(),
        KeyCode::Char('n') => app.clear_categories(),

        // Period selector
        KeyCode::Char('[') => app.shift_period_start(false),
        KeyCode::Char(']') => app.shift_period_start(true),
        KeyCode::Char('{') => app.shift_period_end(false),
        KeyCode::Char('}') => app.shift_period_end(true),

        KeyCode::Char('i') => app.start_editing_name(),
        KeyCode::Char('e') => app.export(),

        _ => {}
    }

    Ok(())
}

/// Handle keys while typing the name
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.commit_name(),
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Backspace => {
            app.name_input.pop();
        }
        KeyCode::Char(c) => app.name_input.push(c),
        _ => {}
    }
    Ok(())
}
