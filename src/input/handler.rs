use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(InputEvent),
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Game(InputEvent::Quit);
        }

        let event = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => InputEvent::Turn(Direction::Up),
            KeyCode::Down => InputEvent::Turn(Direction::Down),
            KeyCode::Left => InputEvent::Turn(Direction::Left),
            KeyCode::Right => InputEvent::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => InputEvent::Turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => InputEvent::Turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => InputEvent::Turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => InputEvent::Turn(Direction::Right),

            // Controls
            KeyCode::Char(' ') | KeyCode::Enter => InputEvent::Start,
            KeyCode::Esc => InputEvent::ToMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Quit,

            _ => return KeyAction::None,
        };

        KeyAction::Game(event)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            press(KeyCode::Up),
            KeyAction::Game(InputEvent::Turn(Direction::Up))
        );
        assert_eq!(
            press(KeyCode::Down),
            KeyAction::Game(InputEvent::Turn(Direction::Down))
        );
        assert_eq!(
            press(KeyCode::Left),
            KeyAction::Game(InputEvent::Turn(Direction::Left))
        );
        assert_eq!(
            press(KeyCode::Right),
            KeyAction::Game(InputEvent::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            press(KeyCode::Char('w')),
            KeyAction::Game(InputEvent::Turn(Direction::Up))
        );
        assert_eq!(
            press(KeyCode::Char('a')),
            KeyAction::Game(InputEvent::Turn(Direction::Left))
        );
        assert_eq!(
            press(KeyCode::Char('s')),
            KeyAction::Game(InputEvent::Turn(Direction::Down))
        );
        assert_eq!(
            press(KeyCode::Char('d')),
            KeyAction::Game(InputEvent::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Game(InputEvent::Turn(Direction::Up))
        );
    }

    #[test]
    fn test_start_keys() {
        assert_eq!(press(KeyCode::Char(' ')), KeyAction::Game(InputEvent::Start));
        assert_eq!(press(KeyCode::Enter), KeyAction::Game(InputEvent::Start));
    }

    #[test]
    fn test_escape_goes_to_menu() {
        assert_eq!(press(KeyCode::Esc), KeyAction::Game(InputEvent::ToMenu));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(KeyCode::Char('q')), KeyAction::Game(InputEvent::Quit));

        let q_upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(q_upper),
            KeyAction::Game(InputEvent::Quit)
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
        assert_eq!(press(KeyCode::Char('r')), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handler.handle_key_event(ctrl_c),
            KeyAction::Game(InputEvent::Quit)
        );
    }
}
