//! Timers behind the simulated upload progress bar.
//!
//! Progress is not measured: a repeating tick nudges the bar forward while the
//! request is outstanding, and a one-shot delay holds it at 100% before the
//! widget resets. Both run under child tokens of the app's root
//! [`CancellationToken`], so teardown stops them.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;

use crate::tui_event::BackendEvent;

/// Period of the simulated progress tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
/// How long the bar stays at 100% after the upload settles.
pub const COMPLETION_HOLD: Duration = Duration::from_millis(400);

/// Owns at most one running timer (tick loop or completion hold).
pub struct ProgressTimers {
    tx: mpsc::UnboundedSender<BackendEvent>,
    root: CancellationToken,
    active: Option<CancellationToken>,
}

impl ProgressTimers {
    pub fn new(tx: mpsc::UnboundedSender<BackendEvent>, root: CancellationToken) -> Self {
        Self {
            tx,
            root,
            active: None,
        }
    }

    /// Start ticking for `attempt`, cancelling whatever timer was running.
    pub fn start(&mut self, attempt: u64) {
        let token = self.replace();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticks.tick() => {
                        if tx.send(BackendEvent::UploadTick { attempt }).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }

    /// Stop ticking and schedule the reset after [`COMPLETION_HOLD`].
    pub fn finish(&mut self, attempt: u64) {
        let token = self.replace();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(COMPLETION_HOLD) => {
                    let _ = tx.send(BackendEvent::UploadReset { attempt });
                }
            }
        });
    }

    fn replace(&mut self) -> CancellationToken {
        self.stop();
        let token = self.root.child_token();
        self.active = Some(token.clone());
        token
    }

    fn stop(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
        }
    }
}

impl Drop for ProgressTimers {
    fn drop(&mut self) {
        self.stop();
    }
}
