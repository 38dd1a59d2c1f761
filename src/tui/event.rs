use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events.
pub enum TuiEvent {
    /// Ctrl+C — quits regardless of which screen is current.
    ForceQuit,
    /// Move the button selection up.
    SelectPrev,
    /// Move the button selection down.
    SelectNext,
    /// Press the selected button.
    Activate,
    /// Press button N directly (keys 1-9, zero-based here).
    PressDigit(usize),
    /// Terminal resized; redraw only.
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Up) => Some(TuiEvent::SelectPrev),
                    (_, KeyCode::Down) => Some(TuiEvent::SelectNext),
                    (_, KeyCode::Enter) => Some(TuiEvent::Activate),
                    (_, KeyCode::Char(c @ '1'..='9')) => {
                        Some(TuiEvent::PressDigit(c as usize - '1' as usize))
                    }
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
