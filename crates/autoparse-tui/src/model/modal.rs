/// Review-and-edit modal for a generated document request.
///
/// `message` is the text last received from the service; `draft` is the
/// user's editable copy. A new message value overwrites the draft, edits never
/// flow back into `message`.
#[derive(Debug, Clone, Default)]
pub struct RequestModal {
    pub open: bool,
    pub message: String,
    pub draft: String,
}

impl RequestModal {
    /// Open with an empty message, ready for the loading placeholder.
    pub fn open(&mut self) {
        self.open = true;
        self.set_message(String::new());
    }

    pub fn close(&mut self) {
        self.open = false;
        self.set_message(String::new());
    }

    /// Accept a message from the service. The draft is reset only when the
    /// value actually changes.
    pub fn set_message(&mut self, message: String) {
        if message != self.message {
            self.draft = message.clone();
            self.message = message;
        }
    }

    /// The placeholder is shown only until some message text exists.
    pub fn shows_placeholder(&self, loading: bool) -> bool {
        loading && self.message.is_empty()
    }

    pub fn editable(&self, loading: bool) -> bool {
        self.open && !loading
    }

    pub fn can_send(&self, loading: bool) -> bool {
        self.open && !loading && !self.draft.trim().is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.draft.push_str(text);
    }

    pub fn pop(&mut self) {
        self.draft.pop();
    }
}
