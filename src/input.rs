use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Two Escape presses closer than this quit.
pub const DOUBLE_ESCAPE: Duration = Duration::from_millis(250);

/// Tracks the keys that end the show: `q`, Ctrl+C, or a double Escape.
#[derive(Debug, Default)]
pub struct ExitGesture {
    last_escape: Option<Instant>,
}

impl ExitGesture {
    /// Feed a key event received at `at`. Returns true when it should quit.
    pub fn register(&mut self, key: &KeyEvent, at: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('q') => true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => {
                let quit = self
                    .last_escape
                    .is_some_and(|prev| at.duration_since(prev) < DOUBLE_ESCAPE);
                self.last_escape = Some(at);
                quit
            }
            _ => false,
        }
    }
}
