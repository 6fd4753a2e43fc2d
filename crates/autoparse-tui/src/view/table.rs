use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use autoparse_core::Candidate;

use crate::theme::Theme;
use crate::view::{section_title, truncate};

pub const EMPTY_STATE: &str = "No candidates yet. Upload a resume to get started.";
const SELECTED_MARKER: &str = "●";

/// Everything the candidate table needs. Status text and status class come
/// from the caller so the table itself stays free of field rules.
pub struct CandidateTable<'a> {
    pub candidates: &'a [Candidate],
    pub selected_id: Option<&'a str>,
    pub loading: bool,
    pub cursor: usize,
    pub tick: usize,
    pub status_of: fn(&Candidate) -> String,
    pub class_of: fn(&Candidate) -> String,
}

pub fn render(f: &mut Frame, area: Rect, table: &CandidateTable, theme: &Theme) {
    let header = Row::new(
        ["", "Name", "Email", "Company", "Status"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))),
    )
    .height(1);

    let name_width = (area.width as usize / 4).max(8);
    let rows: Vec<Row> = if table.candidates.is_empty() && !table.loading {
        vec![Row::new(vec![
            Cell::from(""),
            Cell::from(EMPTY_STATE).style(Style::default().fg(theme.dim)),
        ])]
    } else {
        table
            .candidates
            .iter()
            .map(|c| {
                let selected = table.selected_id == Some(c.id.as_str());
                let marker = if selected { SELECTED_MARKER } else { "" };
                let row = Row::new(vec![
                    Cell::from(marker).style(Style::default().fg(theme.active)),
                    Cell::from(truncate(&c.name, name_width)),
                    Cell::from(truncate(&c.email, name_width)),
                    Cell::from(truncate(
                        autoparse_core::display::or_dash(c.company.as_deref()),
                        name_width,
                    )),
                    Cell::from((table.status_of)(c))
                        .style(theme.status_style(&(table.class_of)(c))),
                ]);
                if selected {
                    row.style(Style::default().fg(theme.active))
                } else {
                    row
                }
            })
            .collect()
    };

    let widths = [
        Constraint::Length(2),
        Constraint::Min(12),
        Constraint::Min(16),
        Constraint::Min(10),
        Constraint::Length(20),
    ];

    let widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(section_title("Candidates", table.loading, table.tick)),
        )
        .row_highlight_style(theme.highlight_style());

    let mut state = TableState::default();
    if !table.candidates.is_empty() {
        state.select(Some(table.cursor));
    }
    f.render_stateful_widget(widget, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(candidates: &[Candidate], selected: Option<&str>, loading: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 8)).unwrap();
        let theme = Theme::hacker();
        terminal
            .draw(|f| {
                let table = CandidateTable {
                    candidates,
                    selected_id: selected,
                    loading,
                    cursor: 0,
                    tick: 0,
                    status_of: |c| c.display_status().to_string(),
                    class_of: |c| c.status_class(),
                };
                render(f, f.area(), &table, &theme);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_list_shows_empty_state() {
        assert!(screen(&[], None, false).contains("No candidates yet."));
        assert!(!screen(&[], None, true).contains("No candidates yet."));
    }

    #[test]
    fn selected_row_is_marked() {
        let candidates = vec![
            Candidate {
                id: "1".into(),
                name: "Asha".into(),
                status: Some("In Review".into()),
                ..Default::default()
            },
            Candidate {
                id: "2".into(),
                name: "Ravi".into(),
                ..Default::default()
            },
        ];
        let text = screen(&candidates, Some("2"), false);
        assert_eq!(text.matches(SELECTED_MARKER).count(), 1);
        assert!(text.contains("In Review"));
        assert!(text.contains("Pending"));
    }
}
