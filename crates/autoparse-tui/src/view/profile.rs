use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use autoparse_core::display::{format_score, or_dash};
use autoparse_core::CandidateDetails;

use crate::app::App;
use crate::theme::Theme;
use crate::view::{labeled_line, muted_line, section_header, section_title};

pub const NO_SELECTION: &str = "Select a candidate to view their profile";

/// Render the profile panel for the current detail record.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(section_title("Profile", app.loading.detail, app.tick));

    let lines = match &app.detail {
        Some(detail) => profile_lines(detail, theme),
        None => {
            let mut lines = vec![Line::from("")];
            if !app.loading.detail {
                muted_line(&mut lines, NO_SELECTION, theme);
            }
            lines
        }
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn profile_lines<'a>(detail: &'a CandidateDetails, theme: &Theme) -> Vec<Line<'a>> {
    let c = &detail.candidate;
    let status = detail.display_status();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", or_dash(Some(c.name.as_str()))),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{status}]"), theme.status_style(&c.status_class())),
        ]),
        Line::from(""),
    ];

    section_header(&mut lines, "IDENTITY", theme);
    labeled_line(&mut lines, "Email", or_dash(Some(c.email.as_str())), theme);
    labeled_line(&mut lines, "Phone", or_dash(detail.phone.as_deref()), theme);
    lines.push(Line::from(""));

    section_header(&mut lines, "EMPLOYMENT", theme);
    labeled_line(&mut lines, "Company", or_dash(c.company.as_deref()), theme);
    labeled_line(&mut lines, "Designation", or_dash(detail.designation.as_deref()), theme);
    lines.push(Line::from(""));

    section_header(&mut lines, "SKILLS", theme);
    let skills = detail.skills();
    if skills.is_empty() {
        muted_line(&mut lines, "No skills extracted", theme);
    } else {
        let mut spans = vec![Span::raw("  ")];
        for skill in skills {
            spans.push(Span::styled(
                format!("[{skill}]"),
                Style::default().fg(theme.active),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    section_header(&mut lines, "CONFIDENCE SCORES", theme);
    match detail.confidence() {
        Some(scores) => {
            for (field, score) in scores.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {field:<14}"), Style::default().fg(theme.dim)),
                    Span::styled(format_score(score), Style::default().fg(theme.text)),
                ]));
            }
        }
        None => muted_line(&mut lines, "No confidence data", theme),
    }

    lines
}
