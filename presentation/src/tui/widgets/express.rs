//! Express screen: three word inputs, the "Nombrarlo" button and the error line

use crate::tui::state::{Focus, TuiState};
use imaginario_domain::WORD_COUNT;
use imaginario_domain::words::validation::MAX_WORD_LENGTH;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const COLUMN_WIDTH: u16 = 60;

/// Regions of the express screen
pub struct ExpressLayout {
    pub intro: Rect,
    pub fields: [Rect; WORD_COUNT],
    pub button: Rect,
    pub status: Rect,
}

impl ExpressLayout {
    pub fn compute(area: Rect) -> Self {
        let width = area.width.min(COLUMN_WIDTH);
        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(width),
                Constraint::Fill(1),
            ])
            .split(area)[1];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(column);

        Self {
            intro: rows[0],
            fields: [rows[1], rows[2], rows[3]],
            button: rows[4],
            status: rows[5],
        }
    }

    /// Terminal cursor position for the focused word, if one is focused
    pub fn cursor(&self, state: &TuiState) -> Option<Position> {
        let index = state.focus.word_index()?;
        let field = state.fields.get(index)?;
        let rect = self.fields.get(index)?;
        let max_x = rect.right().saturating_sub(2);
        let x = (rect.x + 1 + field.cursor_column() as u16).min(max_x);
        Some(Position::new(x, rect.y + 1))
    }
}

pub struct ExpressWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ExpressWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn render_field(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let field = &self.state.fields[index];
        let focused = self.state.focus == Focus::Word(index) && self.state.accepts_input();

        let border_style = if focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let counter = format!(" {}/{} ", field.char_count(), MAX_WORD_LENGTH);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Palabra {} ", index + 1))
            .title_top(Line::from(counter).right_aligned())
            .border_style(border_style);

        let text = if field.text.is_empty() && !focused {
            Span::styled("...", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(field.text.as_str(), Style::default().fg(Color::White))
        };

        Paragraph::new(Line::from(text)).block(block).render(area, buf);
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let (label, style) = if self.state.is_loading {
            (
                format!("{} Nombrándolo...", self.state.spinner()),
                Style::default().fg(Color::Yellow),
            )
        } else if self.state.is_transitioning {
            ("...".to_string(), Style::default().fg(Color::DarkGray))
        } else if self.state.focus == Focus::Button {
            (
                "[ Nombrarlo ]".to_string(),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "[ Nombrarlo ]".to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        };

        Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::NONE))
            .render(
                Rect {
                    y: area.y + 1,
                    height: area.height.saturating_sub(1),
                    ..area
                },
                buf,
            );
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        if let Some(retry) = &self.state.retry_status {
            lines.push(Line::from(Span::styled(
                retry.as_str(),
                Style::default().fg(Color::Yellow),
            )));
        }
        if let Some(error) = &self.state.error {
            lines.push(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl<'a> Widget for ExpressWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ExpressLayout::compute(area);

        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "¿Cómo te sientes? Nómbralo en tres palabras.",
                Style::default().fg(Color::White),
            )),
        ])
        .alignment(Alignment::Center)
        .render(layout.intro, buf);

        for (index, rect) in layout.fields.iter().enumerate() {
            self.render_field(index, *rect, buf);
        }
        self.render_button(layout.button, buf);
        self.render_status(layout.status, buf);
    }
}
