use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::view::table::CandidateTable;
use crate::view::{profile, table, truncate, upload, verification};

/// Render the single dashboard screen.
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(3), // upload
        Constraint::Length(1), // notice
        Constraint::Min(8),    // body
        Constraint::Length(1), // footer
    ])
    .split(area);

    render_header(f, chunks[0], app);
    upload::render(f, chunks[1], &app.upload, &app.theme);
    render_notice(f, chunks[2], app);
    render_body(f, chunks[3], app);
    render_footer(f, chunks[4], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" AUTOPARSE ", theme.header_style()),
        Span::styled(" Candidates ", Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("[{} candidates] ", app.candidates.len()),
            Style::default().fg(theme.active),
        ),
        Span::styled(
            truncate(&app.api_url, (area.width as usize).saturating_sub(40)),
            Style::default().fg(theme.dim),
        ),
    ]));
    f.render_widget(header, area);
}

fn render_notice(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = if let Some(msg) = app.error() {
        Line::from(Span::styled(
            format!(" ✗ {msg}"),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(msg) = app.success() {
        Line::from(Span::styled(
            format!(" ✓ {msg}"),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    let wide = area.width >= 110;
    let (list_area, side_area) = if wide {
        let cols = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (cols[0], cols[1])
    } else {
        let rows = Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        (rows[0], rows[1])
    };

    let candidates = CandidateTable {
        candidates: &app.candidates,
        selected_id: app.selected_id.as_deref(),
        loading: app.loading.list,
        cursor: app.cursor,
        tick: app.tick,
        status_of: |c| c.display_status().to_string(),
        class_of: |c| c.status_class(),
    };
    table::render(f, list_area, &candidates, &app.theme);

    let side = Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(side_area);
    profile::render(f, side[0], app);
    verification::render(f, side[1], app);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer = Line::from(Span::styled(
        " j/k:nav  Enter:view  u:upload  r:request  p/a:choose docs  s:submit  ?:help  q:quit",
        app.theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), area);
}
