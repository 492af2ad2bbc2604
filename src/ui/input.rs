use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Spawn a new question fetch.
    RetryLoad,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if matches!(key.code, KeyCode::Char('q')) || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    let screen = app.screen().clone();
    match screen {
        Screen::Loading => InputAction::None,
        Screen::LoadError { .. } => {
            if matches!(key.code, KeyCode::Char('r')) {
                return InputAction::RetryLoad;
            }
            InputAction::None
        }
        Screen::Quiz => {
            match key.code {
                KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
                    let index = ch.to_digit(10).unwrap_or(1) as usize;
                    app.select_answer(index - 1);
                }
                KeyCode::Char('s') => app.skip(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    // Manual advance is only meaningful once the answer
                    // is on screen.
                    if app.quiz().answer_revealed {
                        app.advance();
                    }
                }
                _ => {}
            }
            InputAction::None
        }
        Screen::Results => {
            if matches!(key.code, KeyCode::Char('r')) {
                app.restart();
            }
            InputAction::None
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
