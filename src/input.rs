//! Key mapping for the arcade screens.
//!
//! Turns crossterm key events into the UI-agnostic inputs the menu and the
//! game engines understand. Nothing here touches game state.

use crate::games::MinigameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input actions for the game-select menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select, // Enter/Space
    Quit,   // Q/Esc
    Other,
}

/// Ctrl+C quits from anywhere; raw mode stops the terminal from sending SIGINT.
pub fn is_force_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

pub fn menu_input(key: &KeyEvent) -> MenuInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => MenuInput::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Quit,
        _ => MenuInput::Other,
    }
}

/// Unified key → MinigameInput mapping shared by all three games.
pub fn minigame_input(key: &KeyEvent) -> MinigameInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => MinigameInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => MinigameInput::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => MinigameInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => MinigameInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => MinigameInput::Primary,
        KeyCode::Char('f') | KeyCode::Char('F') => MinigameInput::Secondary,
        KeyCode::Char('x') | KeyCode::Char('X') => MinigameInput::Secondary,
        KeyCode::Esc => MinigameInput::Cancel,
        _ => MinigameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_wasd_are_directions() {
        assert_eq!(minigame_input(&key(KeyCode::Up)), MinigameInput::Up);
        assert_eq!(minigame_input(&key(KeyCode::Char('w'))), MinigameInput::Up);
        assert_eq!(minigame_input(&key(KeyCode::Char('A'))), MinigameInput::Left);
        assert_eq!(minigame_input(&key(KeyCode::Down)), MinigameInput::Down);
        assert_eq!(minigame_input(&key(KeyCode::Char('d'))), MinigameInput::Right);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(minigame_input(&key(KeyCode::Enter)), MinigameInput::Primary);
        assert_eq!(minigame_input(&key(KeyCode::Char(' '))), MinigameInput::Primary);
        assert_eq!(minigame_input(&key(KeyCode::Char('f'))), MinigameInput::Secondary);
        assert_eq!(minigame_input(&key(KeyCode::Char('x'))), MinigameInput::Secondary);
        assert_eq!(minigame_input(&key(KeyCode::Esc)), MinigameInput::Cancel);
        assert_eq!(minigame_input(&key(KeyCode::Tab)), MinigameInput::Other);
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu_input(&key(KeyCode::Up)), MenuInput::Up);
        assert_eq!(menu_input(&key(KeyCode::Char('s'))), MenuInput::Down);
        assert_eq!(menu_input(&key(KeyCode::Enter)), MenuInput::Select);
        assert_eq!(menu_input(&key(KeyCode::Char('q'))), MenuInput::Quit);
        assert_eq!(menu_input(&key(KeyCode::Esc)), MenuInput::Quit);
        assert_eq!(menu_input(&key(KeyCode::Char('z'))), MenuInput::Other);
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_force_quit(&ctrl_c));
        assert!(!is_force_quit(&key(KeyCode::Char('c'))));
    }
}
