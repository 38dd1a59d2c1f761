//! # ScreenView Component
//!
//! Renders one screen descriptor: body copy centered in the upper
//! portion, buttons listed underneath with the selected one
//! highlighted. The component knows nothing about the transition
//! graph; it draws whatever descriptor it is handed.

use crate::core::screen::Screen;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct ScreenView<'a> {
    pub screen: &'a Screen,
    /// Index of the highlighted button.
    pub selected: usize,
}

impl<'a> ScreenView<'a> {
    pub fn new(screen: &'a Screen, selected: usize) -> Self {
        Self { screen, selected }
    }

    fn button_lines(&self) -> Vec<Line<'a>> {
        self.screen
            .buttons
            .iter()
            .enumerate()
            .map(|(i, button)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                let marker = if i == self.selected { "▸" } else { " " };
                Line::from(Span::styled(
                    format!("{marker} [{}] {}", i + 1, button.label),
                    style,
                ))
            })
            .collect()
    }
}

impl Component for ScreenView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body_lines: Vec<Line> = self
            .screen
            .body
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();
        let button_lines = self.button_lines();

        let body_height = body_lines.len() as u16;
        let button_height = button_lines.len() as u16;

        let vertical_layout = Layout::vertical([
            Constraint::Length(body_height),
            Constraint::Length(1), // Spacer
            Constraint::Length(button_height),
        ])
        .flex(Flex::Center)
        .split(area);

        frame.render_widget(
            Paragraph::new(body_lines).alignment(Alignment::Center),
            vertical_layout[0],
        );
        frame.render_widget(
            Paragraph::new(button_lines).alignment(Alignment::Center),
            vertical_layout[2],
        );
    }
}
