use std::sync::{Arc, Mutex};
use std::time::Duration;

use client_logging::client_warn;
use tokio_util::sync::CancellationToken;

use scribe_core::{parse_status, InvalidStateError, JobId, PollState, ProgressSignal, StatusPayload};

use crate::api::JobsApi;
use crate::error::ApiError;

/// Receiver of one poller's output.
///
/// `on_terminal` is invoked at most once per poller; `on_poll_error` is
/// informational and never stops the polling loop.
#[async_trait::async_trait]
pub trait PollSubscriber: Send + Sync {
    async fn on_progress(&self, signal: ProgressSignal);
    async fn on_terminal(&self, signal: ProgressSignal, payload: StatusPayload);
    async fn on_poll_error(&self, error: ApiError);
}

struct PollCell {
    state: PollState,
    last_percent: u8,
}

/// Owns the polling lifecycle for exactly one job.
///
/// Ticks are strictly sequential: the loop awaits each status fetch before
/// sleeping again, so fetches never overlap. Cancellation is re-checked
/// after every await, which discards any fetch response that resolves after
/// `cancel()` was called.
#[derive(Clone)]
pub struct JobPoller {
    job_id: JobId,
    api: Arc<dyn JobsApi>,
    subscriber: Arc<dyn PollSubscriber>,
    interval: Duration,
    cell: Arc<Mutex<PollCell>>,
    cancel: CancellationToken,
}

impl JobPoller {
    pub fn new(
        job_id: JobId,
        api: Arc<dyn JobsApi>,
        subscriber: Arc<dyn PollSubscriber>,
        interval: Duration,
    ) -> Self {
        Self {
            job_id,
            api,
            subscriber,
            interval,
            cell: Arc::new(Mutex::new(PollCell {
                state: PollState::Idle,
                last_percent: 0,
            })),
            cancel: CancellationToken::new(),
        }
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    pub fn state(&self) -> PollState {
        self.cell.lock().expect("poll cell lock").state
    }

    /// Begins the interval-driven polling task.
    ///
    /// Only valid from `Idle`; a live poller must be cancelled before a new
    /// one is started so that only one timer is ever running.
    pub fn start(&self) -> Result<(), InvalidStateError> {
        {
            let mut cell = self.cell.lock().expect("poll cell lock");
            cell.state = cell.state.begin()?;
        }

        let poller = self.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = poller.cancel.cancelled() => break,
                    _ = tokio::time::sleep(poller.interval) => {}
                }
                poller.tick().await;
                if poller.state().is_terminal() {
                    break;
                }
            }
        });
        Ok(())
    }

    /// One status fetch. A no-op unless the poller is `Active`, which makes
    /// racing ticks after a terminal transition harmless.
    pub async fn tick(&self) {
        if self.state() != PollState::Active {
            return;
        }

        let result = self.api.job_status(&self.job_id).await;
        if self.cancel.is_cancelled() {
            return;
        }

        let payload = match result {
            Ok(payload) => payload,
            Err(err) => {
                // Transient by design: the next interval is the retry.
                client_warn!("Polling error for job {}: {}", self.job_id, err);
                self.subscriber.on_poll_error(err).await;
                return;
            }
        };

        let signal = {
            let mut cell = self.cell.lock().expect("poll cell lock");
            if cell.state != PollState::Active {
                return;
            }
            let signal = parse_status(&payload, cell.last_percent);
            cell.last_percent = signal.percent;
            if signal.terminal {
                match cell.state.finish(signal.failed) {
                    Some(next) => cell.state = next,
                    None => return,
                }
            }
            signal
        };

        if signal.terminal {
            self.subscriber.on_terminal(signal, payload).await;
        } else {
            self.subscriber.on_progress(signal).await;
        }
    }

    /// Stops the timer and discards any in-flight fetch. Idempotent, and a
    /// no-op on a poller that already completed or failed.
    pub fn cancel(&self) {
        self.cancel.cancel();
        let mut cell = self.cell.lock().expect("poll cell lock");
        cell.state = cell.state.cancel();
    }
}
