use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::centered_rect;
use crate::model::prompt::PathPrompt;
use crate::theme::Theme;

/// Path entry popup used instead of a native file dialog.
pub fn render(f: &mut Frame, prompt: &PathPrompt, theme: &Theme) {
    let popup = centered_rect(70, 5, f.area());
    let lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.active)),
            Span::styled(prompt.input.as_str(), Style::default().fg(theme.text)),
            Span::styled("▏", Style::default().fg(theme.spinner)),
        ]),
        Line::from(Span::styled(
            "Enter: confirm  Esc: cancel  (empty clears a document slot)",
            theme.footer_style(),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.active))
        .title(prompt.target.title());

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
