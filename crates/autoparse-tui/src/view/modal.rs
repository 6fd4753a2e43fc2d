use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::{centered_rect, spinner_char};
use crate::app::App;

pub const PLACEHOLDER: &str = "Generating personalized message...";

/// Review-and-edit overlay for a generated document request.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let modal = &app.modal;
    let loading = app.loading.action;
    let area = f.area();
    let popup = centered_rect(area.width.saturating_sub(10).min(90), area.height.saturating_sub(4).min(20), area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.active))
        .title(" Review Document Request ");
    let inner = block.inner(popup);
    f.render_widget(Clear, popup);
    f.render_widget(block, popup);

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(inner);

    let body = if modal.shows_placeholder(loading) {
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", spinner_char(app.tick)), Style::default().fg(theme.spinner)),
            Span::styled(PLACEHOLDER, Style::default().fg(theme.dim)),
        ]))
    } else {
        let mut text = Text::styled(modal.draft.clone(), Style::default().fg(theme.text));
        if modal.editable(loading) {
            text.push_span(Span::styled("▏", Style::default().fg(theme.spinner)));
        }
        Paragraph::new(text).wrap(Wrap { trim: false })
    };
    f.render_widget(body, chunks[0]);

    let can_send = modal.can_send(loading);
    let footer = Line::from(vec![
        Span::styled(
            "Ctrl+s",
            theme.button_style(can_send).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Send Request  ", theme.button_style(can_send)),
        Span::styled("Esc", theme.button_style(true)),
        Span::styled(" Cancel", theme.footer_style()),
    ]);
    f.render_widget(Paragraph::new(footer), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn placeholder_then_draft() {
        let mut app = App::new("http://test");
        app.modal.open();
        app.loading.action = true;
        assert!(screen(&app).contains(PLACEHOLDER));

        app.loading.action = false;
        app.modal.set_message("Dear Asha".into());
        let text = screen(&app);
        assert!(!text.contains(PLACEHOLDER));
        assert!(text.contains("Dear Asha"));
    }
}
