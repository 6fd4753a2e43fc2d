use std::future::Future;
use std::path::PathBuf;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use autoparse_core::{ApiClient, ApiError, Attachment, Candidate};

use crate::command::Command;
use crate::progress::ProgressTimers;
use crate::tui_event::BackendEvent;

/// Executes app commands on tokio tasks and reports back over a channel.
///
/// Every network command is a single independent task: nothing is queued,
/// retried or cancelled when a newer command of the same kind arrives. Tasks
/// still pending at teardown are dropped via the root cancellation token.
pub struct Backend {
    client: ApiClient,
    tx: mpsc::UnboundedSender<BackendEvent>,
    cancel: CancellationToken,
    timers: ProgressTimers,
}

impl Backend {
    pub fn new(
        client: ApiClient,
        tx: mpsc::UnboundedSender<BackendEvent>,
        cancel: CancellationToken,
    ) -> Self {
        let timers = ProgressTimers::new(tx.clone(), cancel.clone());
        Self {
            client,
            tx,
            cancel,
            timers,
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::LoadCandidates => self.spawn(|client| async move {
                BackendEvent::CandidatesLoaded {
                    result: client.list_candidates().await,
                }
            }),
            Command::LoadDetail { id, generation } => self.spawn(move |client| async move {
                BackendEvent::DetailLoaded {
                    generation,
                    result: client.get_candidate(&id).await,
                }
            }),
            Command::UploadResume { attempt, path } => self.spawn(move |client| async move {
                BackendEvent::ResumeUploaded {
                    attempt,
                    result: upload_and_refresh(&client, path).await,
                }
            }),
            Command::RequestDocuments { id } => self.spawn(move |client| async move {
                BackendEvent::DocumentsRequested {
                    result: client.request_documents(&id).await,
                }
            }),
            Command::SubmitDocuments {
                id,
                pan_card,
                aadhar_card,
            } => self.spawn(move |client| async move {
                let result = submit(&client, &id, pan_card, aadhar_card).await;
                BackendEvent::DocumentsSubmitted {
                    candidate_id: id,
                    result,
                }
            }),
            Command::StartProgress { attempt } => self.timers.start(attempt),
            Command::FinishProgress { attempt } => self.timers.finish(attempt),
        }
    }

    fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = BackendEvent> + Send + 'static,
    {
        let work = task(self.client.clone());
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                event = work => {
                    let _ = tx.send(event);
                }
            }
        });
    }
}

/// Upload the resume, then refetch the list so the new record shows up.
async fn upload_and_refresh(
    client: &ApiClient,
    path: PathBuf,
) -> Result<(Option<Candidate>, Vec<Candidate>), ApiError> {
    let resume = Attachment::from_path(&path).await?;
    let created = client.upload_resume(resume).await?;
    let candidates = client.list_candidates().await?;
    Ok((created, candidates))
}

async fn submit(
    client: &ApiClient,
    id: &str,
    pan_card: Option<PathBuf>,
    aadhar_card: Option<PathBuf>,
) -> Result<String, ApiError> {
    let pan_card = match pan_card {
        Some(path) => Some(Attachment::from_path(&path).await?),
        None => None,
    };
    let aadhar_card = match aadhar_card {
        Some(path) => Some(Attachment::from_path(&path).await?),
        None => None,
    };
    client.submit_documents(id, pan_card, aadhar_card).await
}
