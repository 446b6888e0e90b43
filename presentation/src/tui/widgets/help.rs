//! Help overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct HelpWidget;

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                "Atajos",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Expresar:"),
            Line::from("  Tab / ↓     Siguiente palabra"),
            Line::from("  Shift+Tab / ↑  Palabra anterior"),
            Line::from("  Enter       Siguiente / Nombrarlo"),
            Line::from("  Esc         Salir"),
            Line::from(""),
            Line::from("Reflexión:"),
            Line::from("  f x w i t   Compartir (Facebook, X, WhatsApp, Instagram, TikTok)"),
            Line::from("  c           Copiar texto"),
            Line::from("  e           Guardar tarjeta"),
            Line::from("  r           Nombrar otra"),
            Line::from("  q / Esc     Salir"),
            Line::from(""),
            Line::from("  F1          Mostrar u ocultar esta ayuda"),
            Line::from("  Ctrl+C      Salir"),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Ayuda ")
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
