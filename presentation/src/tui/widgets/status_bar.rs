//! Status bar widget: screen indicator + key hints + flash messages

use crate::tui::state::TuiState;
use imaginario_domain::ViewState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn indicator(&self) -> (&'static str, Color) {
        match self.state.view {
            ViewState::Express => ("EXPRESAR", Color::Magenta),
            ViewState::Reflection => ("REFLEXIÓN", Color::Cyan),
        }
    }

    fn hints(&self) -> &'static str {
        match self.state.view {
            ViewState::Express => "Tab:siguiente  Enter:nombrarlo  F1:ayuda  Esc:salir",
            ViewState::Reflection => "r:nombrar otra  c:copiar  e:tarjeta  ?:ayuda  q:salir",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (label, color) = self.indicator();
        let mode_span = Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        );
        let mode_width = label.chars().count() as u16 + 2;
        buf.set_line(area.x, area.y, &Line::from(vec![mode_span]), mode_width);

        // Flash message or key hints on the right
        let (right_text, right_style) = match &self.state.flash_message {
            Some((flash, _)) => (
                flash.clone(),
                Style::default()
                    .fg(Color::Green)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (
                self.hints().to_string(),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        };

        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            let right_line = Line::from(vec![Span::styled(right_text, right_style)]);
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_hints_follow_view() {
        let mut state = TuiState::new();
        assert!(render(&state).contains("EXPRESAR"));
        state.view = ViewState::Reflection;
        let text = render(&state);
        assert!(text.contains("REFLEXIÓN"));
        assert!(text.contains("r:nombrar otra"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut state = TuiState::new();
        state.set_flash("¡Copiado!");
        let text = render(&state);
        assert!(text.contains("¡Copiado!"));
        assert!(!text.contains("Enter:nombrarlo"));
    }
}
