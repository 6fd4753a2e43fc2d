use std::path::PathBuf;

use autoparse_core::{Candidate, CandidateDetails};

use crate::action::Action;
use crate::command::Command;
use crate::input::InputMode;
use crate::model::documents::{DocumentForm, DocumentKind};
use crate::model::modal::RequestModal;
use crate::model::prompt::{PathPrompt, PromptTarget};
use crate::model::upload::{first_dropped_path, UploadWidget};
use crate::theme::Theme;
use crate::tui_event::BackendEvent;

pub const UPLOAD_SUCCESS: &str = "Resume uploaded successfully!";
pub const SEND_SUCCESS: &str = "Document request sent successfully!";
pub const SUBMIT_SUCCESS: &str = "Documents submitted!";
pub const NO_DOCUMENTS: &str = "Please select at least one document";

/// Independent loading flags; none of them blocks the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loading {
    pub list: bool,
    pub detail: bool,
    pub action: bool,
}

/// The single transient message slot. A new message replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Success(String),
}

/// Main application state.
///
/// `update` handles user actions and `handle_backend_event` handles settled
/// I/O. Neither performs I/O: side effects are queued as [`Command`]s and
/// drained by the main loop with [`take_commands`](App::take_commands).
pub struct App {
    pub candidates: Vec<Candidate>,
    pub selected_id: Option<String>,
    pub detail: Option<CandidateDetails>,
    pub loading: Loading,
    pub notice: Option<Notice>,
    pub documents: DocumentForm,
    pub modal: RequestModal,
    pub upload: UploadWidget,
    pub prompt: Option<PathPrompt>,
    /// Table row under the keyboard cursor (not necessarily the selection).
    pub cursor: usize,
    pub api_url: String,
    pub tick: usize,
    pub theme: Theme,
    pub should_quit: bool,
    pub show_help: bool,
    /// Bumped on every detail fetch; only the latest one may land.
    detail_generation: u64,
    commands: Vec<Command>,
}

impl App {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            candidates: Vec::new(),
            selected_id: None,
            detail: None,
            loading: Loading::default(),
            notice: None,
            documents: DocumentForm::default(),
            modal: RequestModal::default(),
            upload: UploadWidget::new(),
            prompt: None,
            cursor: 0,
            api_url: api_url.into(),
            tick: 0,
            theme: Theme::hacker(),
            should_quit: false,
            show_help: false,
            detail_generation: 0,
            commands: Vec::new(),
        }
    }

    /// Initial load of the candidate list.
    pub fn mount(&mut self) {
        self.loading.list = true;
        self.commands.push(Command::LoadCandidates);
    }

    /// Drain queued side effects.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn input_mode(&self) -> InputMode {
        if self.prompt.is_some() || self.modal.open {
            InputMode::Text
        } else {
            InputMode::Normal
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Error(msg)) => Some(msg),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Success(msg)) => Some(msg),
            _ => None,
        }
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Error(message.into()));
    }

    fn set_success(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Success(message.into()));
    }

    /// Drop an error notice, leaving a success notice in place.
    fn clear_error(&mut self) {
        if matches!(self.notice, Some(Notice::Error(_))) {
            self.notice = None;
        }
    }

    /// Change the selection. A new id triggers a detail fetch; no id clears
    /// the detail record straight away. Re-selecting the current id is a no-op.
    pub fn select(&mut self, id: Option<String>) {
        if self.selected_id == id {
            return;
        }
        self.selected_id = id;
        self.detail_generation += 1;

        match self.selected_id.clone() {
            None => {
                self.detail = None;
                self.loading.detail = false;
            }
            Some(id) => {
                if let Some(pos) = self.candidates.iter().position(|c| c.id == id) {
                    self.cursor = pos;
                }
                self.loading.detail = true;
                self.commands.push(Command::LoadDetail {
                    id,
                    generation: self.detail_generation,
                });
            }
        }
    }

    /// Refetch the detail record of the current selection.
    fn refresh_detail(&mut self) {
        if let Some(id) = self.selected_id.clone() {
            self.detail_generation += 1;
            self.loading.detail = true;
            self.commands.push(Command::LoadDetail {
                id,
                generation: self.detail_generation,
            });
        }
    }

    fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.cursor = self.cursor.min(self.candidates.len().saturating_sub(1));
    }

    /// Start a resume upload unless one is already in flight.
    pub fn start_upload(&mut self, path: PathBuf) {
        let Some(attempt) = self.upload.begin() else {
            log::debug!("upload in progress, ignoring {}", path.display());
            return;
        };
        self.notice = None;
        self.commands.push(Command::StartProgress { attempt });
        self.commands.push(Command::UploadResume { attempt, path });
    }

    /// Files dropped on the terminal: only the first one is uploaded.
    fn drop_files(&mut self, text: &str) {
        if let Some(path) = first_dropped_path(text) {
            self.start_upload(path);
        }
        self.upload.flash_drop();
    }

    fn open_prompt(&mut self, target: PromptTarget) {
        if target == PromptTarget::Resume && self.upload.in_flight() {
            return;
        }
        self.prompt = Some(PathPrompt::new(target));
    }

    fn confirm_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let path = prompt.path();
        match prompt.target {
            PromptTarget::Resume => {
                if let Some(path) = path {
                    self.start_upload(path);
                }
            }
            PromptTarget::Document(kind) => self.documents.set(kind, path),
        }
    }

    /// Ask the service for a document request message and show it for review.
    pub fn request_documents(&mut self) {
        let Some(id) = self.selected_id.clone() else {
            return;
        };
        if self.loading.action {
            return;
        }
        self.clear_error();
        self.modal.open();
        self.loading.action = true;
        self.commands.push(Command::RequestDocuments { id });
    }

    /// Approve the edited request. Delivery is not wired to the service yet,
    /// so this only acknowledges locally.
    pub fn send_request(&mut self) {
        if !self.modal.can_send(self.loading.action) {
            return;
        }
        log::info!(
            "document request for {} approved ({} chars); not delivered, no send endpoint",
            self.selected_id.as_deref().unwrap_or("-"),
            self.modal.draft.chars().count()
        );
        self.set_success(SEND_SUCCESS);
        self.modal.close();
    }

    /// Submit the chosen identity documents for the selected candidate.
    pub fn submit_documents(&mut self) {
        let Some(id) = self.selected_id.clone() else {
            return;
        };
        if self.loading.action {
            return;
        }
        if self.documents.is_empty() {
            self.set_error(NO_DOCUMENTS);
            return;
        }
        self.notice = None;
        self.loading.action = true;
        self.commands.push(Command::SubmitDocuments {
            id,
            pan_card: self.documents.pan_card.clone(),
            aadhar_card: self.documents.aadhar_card.clone(),
        });
    }

    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        if action == Action::Quit {
            self.should_quit = true;
            return true;
        }
        if action == Action::Tick {
            self.tick = self.tick.wrapping_add(1);
            self.upload.tick_drag();
            return false;
        }

        // When help overlay is shown, only allow a few actions through
        if self.show_help {
            if matches!(action, Action::ToggleHelp | Action::NavigateBack) {
                self.show_help = false;
            }
            return false;
        }

        if let Some(prompt) = self.prompt.as_mut() {
            match action {
                Action::InputChar(c) => prompt.push(c),
                Action::InputText(text) => prompt.push_str(&text),
                Action::InputBackspace => prompt.pop(),
                Action::Confirm => self.confirm_prompt(),
                Action::NavigateBack => self.prompt = None,
                _ => {}
            }
            return false;
        }

        if self.modal.open {
            let editable = self.modal.editable(self.loading.action);
            match action {
                Action::InputChar(c) if editable => self.modal.push(c),
                Action::InputText(text) if editable => self.modal.push_str(&text),
                Action::InputBackspace if editable => self.modal.pop(),
                Action::Confirm if editable => self.modal.push('\n'),
                Action::Send => self.send_request(),
                Action::NavigateBack => self.modal.close(),
                _ => {}
            }
            return false;
        }

        match action {
            Action::ToggleHelp => self.show_help = true,
            Action::MoveDown => {
                if self.cursor + 1 < self.candidates.len() {
                    self.cursor += 1;
                }
            }
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::GoTop => self.cursor = 0,
            Action::GoBottom => self.cursor = self.candidates.len().saturating_sub(1),
            Action::Select => {
                if let Some(id) = self.candidates.get(self.cursor).map(|c| c.id.clone()) {
                    self.select(Some(id));
                }
            }
            Action::PickResume => self.open_prompt(PromptTarget::Resume),
            Action::PickPanCard => {
                self.open_prompt(PromptTarget::Document(DocumentKind::PanCard))
            }
            Action::PickAadharCard => {
                self.open_prompt(PromptTarget::Document(DocumentKind::AadharCard))
            }
            Action::RequestDocuments => self.request_documents(),
            Action::SubmitDocuments => self.submit_documents(),
            Action::Drop(text) => self.drop_files(&text),
            _ => {}
        }
        false
    }

    /// Process a backend event and update model state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::CandidatesLoaded { result } => {
                self.loading.list = false;
                match result {
                    Ok(candidates) => {
                        let first = candidates.first().map(|c| c.id.clone());
                        self.set_candidates(candidates);
                        if self.selected_id.is_none() && first.is_some() {
                            self.select(first);
                        }
                    }
                    Err(err) => {
                        log::warn!("loading candidates failed: {err}");
                        self.set_error(err.to_string());
                    }
                }
            }
            BackendEvent::DetailLoaded { generation, result } => {
                if generation != self.detail_generation {
                    log::debug!(
                        "dropping detail response {generation}, current is {}",
                        self.detail_generation
                    );
                    return;
                }
                self.loading.detail = false;
                match result {
                    Ok(detail) => self.detail = detail,
                    Err(err) => {
                        log::warn!("loading candidate details failed: {err}");
                        self.set_error(err.to_string());
                        let stale = self
                            .detail
                            .as_ref()
                            .is_some_and(|d| Some(d.id()) != self.selected_id.as_deref());
                        if stale {
                            self.detail = None;
                        }
                    }
                }
            }
            BackendEvent::ResumeUploaded { attempt, result } => {
                if attempt != self.upload.attempt() {
                    log::debug!("upload {attempt} settled after attempt {}", self.upload.attempt());
                }
                self.upload.settle(attempt);
                self.commands.push(Command::FinishProgress { attempt });
                match result {
                    Ok((created, candidates)) => {
                        self.set_candidates(candidates);
                        if let Some(id) = created.map(|c| c.id).filter(|id| !id.is_empty()) {
                            self.select(Some(id));
                        }
                        self.set_success(UPLOAD_SUCCESS);
                    }
                    Err(err) => {
                        log::error!("resume upload failed: {err}");
                        self.set_error(err.to_string());
                    }
                }
            }
            BackendEvent::DocumentsRequested { result } => {
                self.loading.action = false;
                match result {
                    Ok(message) => self.modal.set_message(message),
                    Err(err) => {
                        log::warn!("document request generation failed: {err}");
                        self.set_error(err.to_string());
                        self.modal.close();
                    }
                }
            }
            BackendEvent::DocumentsSubmitted {
                candidate_id,
                result,
            } => {
                self.loading.action = false;
                match result {
                    Ok(message) => {
                        if message.trim().is_empty() {
                            self.set_success(SUBMIT_SUCCESS);
                        } else {
                            self.set_success(message);
                        }
                        self.documents.clear();
                        if self.selected_id.as_deref() == Some(candidate_id.as_str()) {
                            self.refresh_detail();
                        }
                    }
                    Err(err) => {
                        log::warn!("document submission failed: {err}");
                        self.set_error(err.to_string());
                    }
                }
            }
            BackendEvent::UploadTick { attempt } => self.upload.advance(attempt),
            BackendEvent::UploadReset { attempt } => self.upload.reset(attempt),
        }
    }

    /// Render the current screen.
    pub fn view(&self, f: &mut ratatui::Frame) {
        crate::view::dashboard::render(f, self);

        if self.modal.open {
            crate::view::modal::render(f, self);
        }
        if let Some(prompt) = &self.prompt {
            crate::view::prompt::render(f, prompt, &self.theme);
        }
        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}
