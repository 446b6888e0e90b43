//! Reflection screen: the invented word, "QUÉ ES", "PARA ACOMPAÑARTE" and share hints

use crate::tui::state::TuiState;
use imaginario_domain::{GenerationResult, ShareTarget};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const COLUMN_WIDTH: u16 = 70;

pub struct ReflectionWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ReflectionWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn section(title: &'static str, body: &str) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(body.to_string()),
            Line::from(""),
        ]
    }

    fn result_lines(result: &GenerationResult) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                result.word().to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(""),
        ];
        lines.extend(Self::section("QUÉ ES", result.definition()));
        lines.extend(Self::section("PARA ACOMPAÑARTE", result.advice()));
        lines
    }

    fn share_hints() -> Vec<Line<'static>> {
        let key = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let label = Style::default().fg(Color::Gray);

        let mut share = vec![Span::styled("Compartir: ", label)];
        for target in ShareTarget::all() {
            share.push(Span::styled(target.shortcut().to_string(), key));
            share.push(Span::styled(format!(" {}  ", target.display_name()), label));
        }

        let actions = vec![
            Span::styled("c", key),
            Span::styled(" copiar  ", label),
            Span::styled("e", key),
            Span::styled(" guardar tarjeta  ", label),
            Span::styled("r", key),
            Span::styled(" Nombrar otra  ", label),
            Span::styled("q", key),
            Span::styled(" salir", label),
        ];

        vec![Line::from(share), Line::from(actions)]
    }
}

impl<'a> Widget for ReflectionWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(result) = &self.state.result else {
            return;
        };

        let width = area.width.min(COLUMN_WIDTH);
        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(width),
                Constraint::Fill(1),
            ])
            .split(area)[1];

        let fallback_height = if self.state.fallback_text.is_some() { 7 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(fallback_height),
                Constraint::Length(3),
            ])
            .split(column);

        Paragraph::new(Self::result_lines(result))
            .wrap(Wrap { trim: true })
            .render(rows[0], buf);

        if let Some(text) = &self.state.fallback_text {
            Paragraph::new(text.as_str())
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Copia este texto ")
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .render(rows[1], buf);
        }

        Paragraph::new(Self::share_hints())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP))
            .render(rows[2], buf);
    }
}
