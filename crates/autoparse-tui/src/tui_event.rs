use autoparse_core::{ApiError, Candidate, CandidateDetails};

/// Events flowing from backend tasks to the TUI.
#[derive(Debug)]
pub enum BackendEvent {
    /// Candidate list fetch settled.
    CandidatesLoaded {
        result: Result<Vec<Candidate>, ApiError>,
    },
    /// Detail fetch settled. `generation` identifies the selection it was
    /// issued for.
    DetailLoaded {
        generation: u64,
        result: Result<Option<CandidateDetails>, ApiError>,
    },
    /// Resume upload and the list refetch that follows it settled.
    ResumeUploaded {
        attempt: u64,
        result: Result<(Option<Candidate>, Vec<Candidate>), ApiError>,
    },
    /// Generated document request text arrived (or failed).
    DocumentsRequested {
        result: Result<String, ApiError>,
    },
    /// Manual document submission settled.
    DocumentsSubmitted {
        candidate_id: String,
        result: Result<String, ApiError>,
    },
    /// One step of simulated upload progress.
    UploadTick {
        attempt: u64,
    },
    /// Completion hold elapsed.
    UploadReset {
        attempt: u64,
    },
}
