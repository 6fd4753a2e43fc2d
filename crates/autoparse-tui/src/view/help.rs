use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::centered_rect;
use crate::theme::Theme;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup = centered_rect(60, 28, area);

    let mut lines = vec![
        Line::from(Span::styled(
            " Keyboard Shortcuts ",
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.header_bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    super::section_header(&mut lines, "Candidates", theme);
    lines.extend([
        key_line("j / ↓", "Move down", theme),
        key_line("k / ↑", "Move up", theme),
        key_line("g / Home", "Go to top", theme),
        key_line("G / End", "Go to bottom", theme),
        key_line("Enter", "View candidate profile", theme),
        Line::from(""),
    ]);
    super::section_header(&mut lines, "Upload", theme);
    lines.extend([
        key_line("u", "Choose a resume file", theme),
        key_line("drop / paste", "Upload the dropped file", theme),
        Line::from(""),
    ]);
    super::section_header(&mut lines, "Verification", theme);
    lines.extend([
        key_line("r", "Trigger document request", theme),
        key_line("p / a", "Choose PAN / Aadhaar file", theme),
        key_line("s", "Submit documents", theme),
        key_line("Ctrl+s", "Send request (in review)", theme),
        Line::from(""),
    ]);
    super::section_header(&mut lines, "Global", theme);
    lines.extend([
        key_line("Esc", "Close dialog", theme),
        key_line("?", "Toggle this help", theme),
        key_line("q", "Quit", theme),
        key_line("Ctrl+c", "Force quit", theme),
    ]);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<16}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}
