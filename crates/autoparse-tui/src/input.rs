use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key shortcuts.
    Normal,
    /// A prompt or the request editor has focus; keys are text.
    Text,
}

/// Map a crossterm terminal event to a TUI action.
///
/// Bracketed paste is how terminals deliver files dropped onto them, so in
/// normal mode a paste is treated as a drop.
pub fn map_event(event: &Event, mode: InputMode) -> Action {
    match (event, mode) {
        (Event::Key(key), InputMode::Normal) if key.kind == KeyEventKind::Press => map_key(key),
        (Event::Key(key), InputMode::Text) if key.kind == KeyEventKind::Press => map_text_key(key),
        (Event::Paste(text), InputMode::Normal) => Action::Drop(text.clone()),
        (Event::Paste(text), InputMode::Text) => Action::InputText(text.clone()),
        _ => Action::None,
    }
}

fn map_key(key: &KeyEvent) -> Action {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::Select,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Char('u') => Action::PickResume,
        KeyCode::Char('p') => Action::PickPanCard,
        KeyCode::Char('a') => Action::PickAadharCard,
        KeyCode::Char('r') => Action::RequestDocuments,
        KeyCode::Char('s') => Action::SubmitDocuments,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

fn map_text_key(key: &KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('s') => Action::Send,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn shortcuts_only_in_normal_mode() {
        let q = press(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_event(&q, InputMode::Normal), Action::Quit);
        assert_eq!(map_event(&q, InputMode::Text), Action::InputChar('q'));

        let r = press(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(map_event(&r, InputMode::Normal), Action::RequestDocuments);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ctrl_c = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_event(&ctrl_c, InputMode::Normal), Action::Quit);
        assert_eq!(map_event(&ctrl_c, InputMode::Text), Action::Quit);
    }

    #[test]
    fn ctrl_s_sends_in_text_mode() {
        let ctrl_s = press(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(map_event(&ctrl_s, InputMode::Text), Action::Send);
    }

    #[test]
    fn paste_is_a_drop_in_normal_mode() {
        let paste = Event::Paste("/tmp/cv.pdf".into());
        assert_eq!(
            map_event(&paste, InputMode::Normal),
            Action::Drop("/tmp/cv.pdf".into())
        );
        assert_eq!(
            map_event(&paste, InputMode::Text),
            Action::InputText("/tmp/cv.pdf".into())
        );
    }
}
