//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Character keys with a fixed meaning that cannot be rebound to rotate.
pub const RESERVED_KEYS: [char; 2] = [' ', 'r'];

/// Default rotate key.
pub const DEFAULT_ROTATE_KEY: char = 'q';

/// User-configurable part of the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    rotate: char,
}

impl KeyBindings {
    /// Bind rotate to `rotate` (matched case-insensitively).
    ///
    /// Returns `None` for reserved or non-printable characters.
    pub fn new(rotate: char) -> Option<Self> {
        let rotate = rotate.to_ascii_lowercase();
        if rotate.is_control() || RESERVED_KEYS.contains(&rotate) {
            return None;
        }
        Some(Self { rotate })
    }

    pub fn rotate_key(&self) -> char {
        self.rotate
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rotate: DEFAULT_ROTATE_KEY,
        }
    }
}

/// Map keyboard input to game actions.
///
/// Arrow keys move, drop (down) and rotate (up); the bound rotate key also
/// rotates. Enter, Space and `r` press the start control.
pub fn handle_key_event(key: KeyEvent, bindings: &KeyBindings) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(c) if c.to_ascii_lowercase() == bindings.rotate => Some(GameAction::Rotate),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(GameAction::Start)
        }
        _ => None,
    }
}

/// Map a full key event, including its kind.
///
/// Presses and terminal auto-repeats each produce one action (one cell per
/// event, no DAS). Releases and quit chords produce none.
pub fn action_for_event(key: KeyEvent, bindings: &KeyBindings) -> Option<GameAction> {
    if should_quit(key) {
        return None;
    }
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => handle_key_event(key, bindings),
        KeyEventKind::Release => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_arrow_keys() {
        let b = KeyBindings::default();
        assert_eq!(handle_key_event(key(KeyCode::Left), &b), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Right), &b), Some(GameAction::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Down), &b), Some(GameAction::SoftDrop));
        assert_eq!(handle_key_event(key(KeyCode::Up), &b), Some(GameAction::Rotate));
    }

    #[test]
    fn test_default_rotate_key() {
        let b = KeyBindings::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &b), Some(GameAction::Rotate));
        assert_eq!(handle_key_event(key(KeyCode::Char('Q')), &b), Some(GameAction::Rotate));
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &b), None);
    }

    #[test]
    fn test_custom_rotate_key() {
        let b = KeyBindings::new('X').unwrap();
        assert_eq!(b.rotate_key(), 'x');
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &b), Some(GameAction::Rotate));
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &b), None);
    }

    #[test]
    fn test_reserved_rotate_keys_rejected() {
        assert!(KeyBindings::new('r').is_none());
        assert!(KeyBindings::new('R').is_none());
        assert!(KeyBindings::new(' ').is_none());
        assert!(KeyBindings::new('\n').is_none());
    }

    #[test]
    fn test_start_keys() {
        let b = KeyBindings::default();
        assert_eq!(handle_key_event(key(KeyCode::Enter), &b), Some(GameAction::Start));
        assert_eq!(handle_key_event(key(KeyCode::Char(' ')), &b), Some(GameAction::Start));
        assert_eq!(handle_key_event(key(KeyCode::Char('r')), &b), Some(GameAction::Start));
    }

    #[test]
    fn test_release_is_ignored() {
        let b = KeyBindings::default();
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for_event(release, &b), None);

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..release
        };
        assert_eq!(action_for_event(repeat, &b), Some(GameAction::MoveLeft));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert!(!should_quit(key(KeyCode::Char('q'))));
        assert_eq!(
            action_for_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &KeyBindings::new('c').unwrap()
            ),
            None
        );
    }
}
