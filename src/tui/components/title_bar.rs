//! # TitleBar Component
//!
//! Top status bar showing the app name, the current screen's title,
//! and a transient status message.
//!
//! Purely presentational — it receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar {
//!     screen_title: "Map".to_string(),
//!     status_message: app.status_message.clone(),
//! };
//! title_bar.render(frame, title_area);
//! ```
//!
//! The status message, when present, is appended after a separator:
//! `"Relic Hunt — Map | Checked in at 'old_mill'."`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Title of the current screen (e.g. "Map").
    pub screen_title: String,
    /// Transient status (e.g. "Checked in at 'old_mill'.").
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String) -> Self {
        Self {
            screen_title,
            status_message,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Relic Hunt — {}", self.screen_title)
        } else {
            format!("Relic Hunt — {} | {}", self.screen_title, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
