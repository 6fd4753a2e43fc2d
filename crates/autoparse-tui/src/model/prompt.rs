use std::path::PathBuf;

use crate::model::documents::DocumentKind;

/// What a confirmed path is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTarget {
    Resume,
    Document(DocumentKind),
}

impl PromptTarget {
    pub fn title(self) -> &'static str {
        match self {
            Self::Resume => " Resume file (.pdf, .docx) ",
            Self::Document(DocumentKind::PanCard) => " PAN Card file (image or .pdf) ",
            Self::Document(DocumentKind::AadharCard) => " Aadhaar Card file (image or .pdf) ",
        }
    }
}

/// Single-line path input standing in for a native file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrompt {
    pub target: PromptTarget,
    pub input: String,
}

impl PathPrompt {
    pub fn new(target: PromptTarget) -> Self {
        Self {
            target,
            input: String::new(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
    }

    /// Pasted text: newlines are dropped since paths are single-line.
    pub fn push_str(&mut self, text: &str) {
        self.input.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }

    /// The typed input as one path, spaces included. One pair of surrounding
    /// quotes and a `file://` prefix are removed. Blank input gives `None`.
    pub fn path(&self) -> Option<PathBuf> {
        let text = self.input.trim();
        let unquoted = ['\'', '"']
            .iter()
            .find_map(|q| {
                text.strip_prefix(*q)
                    .and_then(|rest| rest.strip_suffix(*q))
            })
            .unwrap_or(text);
        let path = unquoted.strip_prefix("file://").unwrap_or(unquoted);
        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}
