//! Header widget: app title, tagline and model

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "El Imaginario",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Tres palabras. Un estado emocional.",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];

        let mut block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White));
        if !self.state.model_name.is_empty() {
            block = block.title_top(
                Line::from(Span::styled(
                    format!(" {} ", self.state.model_name),
                    Style::default().fg(Color::DarkGray),
                ))
                .right_aligned(),
            );
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn test_header_shows_title_and_model() {
        let state = TuiState::new().with_model_name("gpt-3.5-turbo");
        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new(&state).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("El Imaginario"));
        assert!(text.contains("Tres palabras. Un estado emocional."));
        assert!(text.contains("gpt-3.5-turbo"));
    }
}
