use std::path::PathBuf;

/// Side effects requested by the app, executed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadCandidates,
    LoadDetail {
        id: String,
        generation: u64,
    },
    /// Upload a resume, then refetch the list.
    UploadResume {
        attempt: u64,
        path: PathBuf,
    },
    RequestDocuments {
        id: String,
    },
    SubmitDocuments {
        id: String,
        pan_card: Option<PathBuf>,
        aadhar_card: Option<PathBuf>,
    },
    /// Start the repeating simulated-progress timer.
    StartProgress {
        attempt: u64,
    },
    /// Stop the progress timer and schedule the delayed reset.
    FinishProgress {
        attempt: u64,
    },
}
