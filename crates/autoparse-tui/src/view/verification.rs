use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use autoparse_core::display::{format_timestamp, or_dash, status_class};
use autoparse_core::SubmittedDocument;

use crate::app::App;
use crate::model::documents::DocumentKind;
use crate::theme::Theme;
use crate::view::{muted_line, section_header};

/// Render the verification panel: request button, submitted documents and
/// the manual submission form.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let busy = app.loading.action;
    let has_selection = app.selected_id.is_some();
    let mut lines = vec![Line::from("")];

    let request_label = if busy { "Sending..." } else { "Trigger Document Request" };
    lines.push(Line::from(vec![
        Span::styled(" r ", theme.button_style(has_selection && !busy)),
        Span::styled(
            format!("[ {request_label} ]"),
            theme.button_style(has_selection && !busy),
        ),
    ]));
    lines.push(Line::from(""));

    section_header(&mut lines, "SUBMITTED DOCUMENTS", theme);
    let documents = app.detail.as_ref().map(|d| d.documents()).unwrap_or(&[]);
    if documents.is_empty() {
        muted_line(&mut lines, "No documents uploaded yet", theme);
    } else {
        for doc in documents {
            lines.push(document_line(doc, theme));
        }
    }
    lines.push(Line::from(""));

    section_header(&mut lines, "MANUAL SUBMISSION", theme);
    for (key, kind) in [("p", DocumentKind::PanCard), ("a", DocumentKind::AadharCard)] {
        let chosen = app.documents.display_name(kind);
        let (text, style) = match chosen {
            Some(name) => (name, Style::default().fg(theme.text)),
            None => ("No file selected".to_string(), Style::default().fg(theme.dim)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {key} "), theme.button_style(has_selection)),
            Span::styled(format!("{:<14}", kind.label()), Style::default().fg(theme.dim)),
            Span::styled(text, style),
        ]));
    }
    let submit_label = if busy { "Uploading..." } else { "Submit Documents" };
    lines.push(Line::from(vec![
        Span::styled(" s ", theme.button_style(has_selection && !busy)),
        Span::styled(
            format!("[ {submit_label} ]"),
            theme.button_style(has_selection && !busy),
        ),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Identity Verification ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn document_line<'a>(doc: &'a SubmittedDocument, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            format!("  {:<14}", or_dash(Some(doc.doc_type.as_str()))),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", or_dash(doc.file_name.as_deref())),
            Style::default().fg(theme.text),
        ),
    ];
    if let Some(at) = doc.submitted_at.as_deref().filter(|s| !s.is_empty()) {
        spans.push(Span::styled(
            format!("{} ", format_timestamp(at)),
            Style::default().fg(theme.dim),
        ));
    }
    if let Some(status) = doc.status.as_deref().filter(|s| !s.is_empty()) {
        spans.push(Span::styled(
            format!("[{status}]"),
            theme.status_style(&status_class(status)),
        ));
    }
    if let Some(url) = doc.file_url.as_deref().filter(|s| !s.is_empty()) {
        spans.push(Span::styled(format!(" {url}"), Style::default().fg(theme.dim)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoparse_core::CandidateDetails;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| render(f, f.area(), app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_form_and_no_documents() {
        let app = App::new("http://test");
        let text = screen(&app);
        assert!(text.contains("Trigger Document Request"));
        assert!(text.contains("No documents uploaded yet"));
        assert_eq!(text.matches("No file selected").count(), 2);
    }

    #[test]
    fn busy_labels_and_chosen_files() {
        let mut app = App::new("http://test");
        app.loading.action = true;
        app.documents
            .set(DocumentKind::PanCard, Some(PathBuf::from("/docs/pan.pdf")));
        app.detail = Some(CandidateDetails {
            documents: Some(vec![SubmittedDocument {
                doc_type: "aadhar_card".into(),
                file_name: Some("aadhar.jpg".into()),
                status: Some("Verified".into()),
                ..Default::default()
            }]),
            ..Default::default()
        });
        let text = screen(&app);
        assert!(text.contains("Sending..."));
        assert!(text.contains("Uploading..."));
        assert!(text.contains("pan.pdf"));
        assert!(text.contains("aadhar.jpg"));
        assert!(text.contains("[Verified]"));
        assert_eq!(text.matches("No file selected").count(), 1);
    }
}
