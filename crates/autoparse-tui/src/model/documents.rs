use std::path::{Path, PathBuf};

/// Identity document slots in the manual submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PanCard,
    AadharCard,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::PanCard => "PAN Card",
            Self::AadharCard => "Aadhaar Card",
        }
    }
}

/// Files chosen for manual submission, not yet sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentForm {
    pub pan_card: Option<PathBuf>,
    pub aadhar_card: Option<PathBuf>,
}

impl DocumentForm {
    pub fn slot(&self, kind: DocumentKind) -> Option<&Path> {
        match kind {
            DocumentKind::PanCard => self.pan_card.as_deref(),
            DocumentKind::AadharCard => self.aadhar_card.as_deref(),
        }
    }

    /// Replace (or with `None`, clear) one slot.
    pub fn set(&mut self, kind: DocumentKind, path: Option<PathBuf>) {
        match kind {
            DocumentKind::PanCard => self.pan_card = path,
            DocumentKind::AadharCard => self.aadhar_card = path,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pan_card.is_none() && self.aadhar_card.is_none()
    }

    pub fn clear(&mut self) {
        self.pan_card = None;
        self.aadhar_card = None;
    }

    /// File name shown next to a slot.
    pub fn display_name(&self, kind: DocumentKind) -> Option<String> {
        self.slot(kind).map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| p.display().to_string())
        })
    }
}
