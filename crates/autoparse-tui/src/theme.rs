use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct Theme {
    pub success: Color,
    pub error: Color,
    pub warning: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub drag: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            header_fg: Color::Black,
            header_bg: Color::Green,
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            active: Color::Cyan,
            drag: Color::Magenta,
            spinner: Color::Cyan,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Pill color for a status class such as `"completed"` or `"in-review"`.
    pub fn status_color(&self, class: &str) -> Color {
        let has = |words: &[&str]| words.iter().any(|w| class.contains(w));
        if has(&["fail", "error", "reject", "invalid"]) {
            self.error
        } else if has(&["complete", "verified", "success", "extracted", "approved", "done"]) {
            self.success
        } else if has(&["pending", "review", "progress", "processing", "queued", "requested"]) {
            self.warning
        } else {
            self.active
        }
    }

    pub fn status_style(&self, class: &str) -> Style {
        Style::default()
            .fg(self.status_color(class))
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg).add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().bg(self.highlight_bg).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }

    /// Enabled or greyed-out style for an action hint.
    pub fn button_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.active).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.dim)
        }
    }
}
