use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::model::upload::UploadWidget;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, upload: &UploadWidget, theme: &Theme) {
    let border = if upload.drag_active {
        Style::default().fg(theme.drag).add_modifier(Modifier::BOLD)
    } else {
        theme.border_style()
    };

    if upload.in_flight() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Uploading Resume... ");
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(theme.success))
            .percent(u16::from(upload.progress.min(100)))
            .label(format!("{}%", upload.progress));
        f.render_widget(gauge, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Upload Candidate Resume ");
    let hint = Line::from(vec![
        Span::styled(" u ", theme.button_style(true)),
        Span::styled("choose a file, or drop a .pdf/.docx onto the terminal", Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(hint).block(block), area);
}
