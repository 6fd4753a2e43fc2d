use std::path::PathBuf;

/// Simulated progress advances by this much per tick.
pub const PROGRESS_STEP: u8 = 5;
/// Simulated progress never passes this until the upload settles.
pub const PROGRESS_CEILING: u8 = 95;
/// UI ticks the drop highlight stays visible after files land.
pub const DRAG_HOLD_TICKS: u8 = 3;

/// Lifecycle of the resume upload widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    /// Request outstanding; progress is simulated.
    Uploading,
    /// Request settled; progress held at 100 until the reset fires.
    Completing,
}

/// Upload widget state: the in-flight guard, simulated progress and the
/// drag highlight.
///
/// Every attempt gets a fresh id so that late timer events from a previous
/// attempt can be told apart and ignored.
#[derive(Debug, Clone)]
pub struct UploadWidget {
    pub phase: UploadPhase,
    pub progress: u8,
    pub drag_active: bool,
    attempt: u64,
    drag_hold: u8,
}

impl Default for UploadWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadWidget {
    pub fn new() -> Self {
        Self {
            phase: UploadPhase::Idle,
            progress: 0,
            drag_active: false,
            attempt: 0,
            drag_hold: 0,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.phase != UploadPhase::Idle
    }

    /// Id of the most recent attempt.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Start a new attempt. Returns `None` while another one is in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.in_flight() {
            return None;
        }
        self.attempt += 1;
        self.phase = UploadPhase::Uploading;
        self.progress = 0;
        self.drag_active = false;
        Some(self.attempt)
    }

    /// One timer tick of simulated progress.
    pub fn advance(&mut self, attempt: u64) {
        if attempt != self.attempt || self.phase != UploadPhase::Uploading {
            return;
        }
        self.progress = self
            .progress
            .saturating_add(PROGRESS_STEP)
            .min(PROGRESS_CEILING);
    }

    /// The request settled, successfully or not.
    pub fn settle(&mut self, attempt: u64) {
        if attempt != self.attempt || self.phase != UploadPhase::Uploading {
            return;
        }
        self.phase = UploadPhase::Completing;
        self.progress = 100;
    }

    /// Completion hold elapsed; back to idle.
    pub fn reset(&mut self, attempt: u64) {
        if attempt != self.attempt || self.phase != UploadPhase::Completing {
            return;
        }
        self.phase = UploadPhase::Idle;
        self.progress = 0;
    }

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
        self.drag_hold = 0;
    }

    /// Highlight the drop target for the next few UI ticks.
    pub fn flash_drop(&mut self) {
        self.drag_enter();
        self.drag_hold = DRAG_HOLD_TICKS;
    }

    /// One UI tick; clears a held drop highlight once it runs out.
    pub fn tick_drag(&mut self) {
        if self.drag_hold == 0 {
            return;
        }
        self.drag_hold -= 1;
        if self.drag_hold == 0 {
            self.drag_leave();
        }
    }
}

/// First path in text pasted by a terminal when files are dropped on it.
///
/// Handles single/double quoting, backslash-escaped spaces and `file://`
/// URLs. Later paths are ignored.
pub fn first_dropped_path(text: &str) -> Option<PathBuf> {
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = text.trim().chars();
    let mut started = false;

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                started = true;
            }
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                started = true;
            }
            (None, c) if c.is_whitespace() => {
                if started {
                    break;
                }
            }
            (None, c) => {
                current.push(c);
                started = true;
            }
        }
    }

    let path = current.strip_prefix("file://").unwrap_or(&current);
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
