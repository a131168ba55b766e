//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which screen is on display
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum View {
    #[default]
    List,
    Detail,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // List navigation
    SelectNext,
    SelectPrev,

    // Screen navigation
    OpenDetail,
    CloseDetail,

    // Data
    Refresh,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, view: View, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        _ => {}
    }

    match view {
        View::List => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
            KeyCode::Enter => Some(UiEvent::OpenDetail),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            _ => None,
        },
        View::Detail => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Some(UiEvent::CloseDetail),
            _ => None,
        },
    }
}
