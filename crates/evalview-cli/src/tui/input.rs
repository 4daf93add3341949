use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Logical key, independent of how the terminal encodes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    Left,
    Right,
    /// Enter or Space
    Confirm,
    /// Escape or Backspace
    Back,
    /// `q`: quits from the list, goes back from the detail view
    Quit,
    /// Ctrl+C, which raw mode delivers as a key instead of a signal
    Interrupt,
    Other,
}

impl KeyAction {
    pub fn from_key(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return KeyAction::Other;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::Interrupt
            }
            KeyCode::Up => KeyAction::Up,
            KeyCode::Down => KeyAction::Down,
            KeyCode::Left => KeyAction::Left,
            KeyCode::Right => KeyAction::Right,
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Confirm,
            KeyCode::Esc | KeyCode::Backspace => KeyAction::Back,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(KeyAction::from_key(press(KeyCode::Up)), KeyAction::Up);
        assert_eq!(KeyAction::from_key(press(KeyCode::Down)), KeyAction::Down);
        assert_eq!(KeyAction::from_key(press(KeyCode::Left)), KeyAction::Left);
        assert_eq!(KeyAction::from_key(press(KeyCode::Right)), KeyAction::Right);
    }

    #[test]
    fn test_confirm_and_back_keys() {
        assert_eq!(KeyAction::from_key(press(KeyCode::Enter)), KeyAction::Confirm);
        assert_eq!(KeyAction::from_key(press(KeyCode::Char(' '))), KeyAction::Confirm);
        assert_eq!(KeyAction::from_key(press(KeyCode::Esc)), KeyAction::Back);
        assert_eq!(KeyAction::from_key(press(KeyCode::Backspace)), KeyAction::Back);
    }

    #[test]
    fn test_quit_and_interrupt() {
        assert_eq!(KeyAction::from_key(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            KeyAction::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Interrupt
        );
        assert_eq!(KeyAction::from_key(press(KeyCode::Char('c'))), KeyAction::Other);
    }

    #[test]
    fn test_unmapped_keys_are_other() {
        assert_eq!(KeyAction::from_key(press(KeyCode::Char('j'))), KeyAction::Other);
        assert_eq!(KeyAction::from_key(press(KeyCode::Tab)), KeyAction::Other);
        assert_eq!(KeyAction::from_key(press(KeyCode::Char('Q'))), KeyAction::Other);
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(KeyAction::from_key(release), KeyAction::Other);
    }
}
