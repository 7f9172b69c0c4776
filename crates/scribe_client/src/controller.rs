use std::sync::{Arc, Mutex};
use std::time::Duration;

use client_logging::{client_error, client_info};

use scribe_core::{Job, JobId, JobPhase, PollState, ProgressSignal, StatusPayload};

use crate::api::JobsApi;
use crate::artifact::resolve_artifact;
use crate::error::{ApiError, SubmitError};
use crate::events::{EventSink, JobEvent, LogLevel};
use crate::poller::{JobPoller, PollSubscriber};

struct TrackedJob {
    job: Job,
    poller: JobPoller,
}

/// Orchestrates submission and wires poller output to the event surface.
///
/// Owns the single "current job": a new submission cancels the previous
/// poller before a replacement starts, so at most one timer is ever live.
pub struct JobController {
    api: Arc<dyn JobsApi>,
    sink: Arc<dyn EventSink>,
    poll_interval: Duration,
    current: Arc<Mutex<Option<TrackedJob>>>,
}

impl JobController {
    pub fn new(api: Arc<dyn JobsApi>, sink: Arc<dyn EventSink>, poll_interval: Duration) -> Self {
        Self {
            api,
            sink,
            poll_interval,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Submits a transcription job and starts polling it.
    ///
    /// An empty URL is rejected before any network call. A backend
    /// rejection surfaces as [`SubmitError::Remote`] and leaves the
    /// previous job (if any) untouched.
    pub async fn submit(&self, url: &str) -> Result<JobId, SubmitError> {
        let url = url.trim();
        if url.is_empty() {
            self.log(LogLevel::Error, "Please enter a valid URL");
            return Err(SubmitError::Validation);
        }

        self.log(LogLevel::Info, format!("Submitting job for: {url}..."));
        let job_id = match self.api.create_job(url).await {
            Ok(job_id) => job_id,
            Err(err) => {
                let err = SubmitError::from(err);
                self.log(LogLevel::Error, format!("Error: {err}"));
                return Err(err);
            }
        };

        self.log(LogLevel::Info, format!("Job created! ID: {job_id}"));

        let subscriber = Arc::new(ControllerSubscriber {
            job_id: job_id.clone(),
            api: self.api.clone(),
            sink: self.sink.clone(),
            current: self.current.clone(),
        });
        let poller = JobPoller::new(
            job_id.clone(),
            self.api.clone(),
            subscriber,
            self.poll_interval,
        );

        {
            let mut current = self.current.lock().expect("current job lock");
            // The old timer must die before the new one starts.
            if let Some(previous) = current.take() {
                previous.poller.cancel();
                client_info!(
                    "Replaced job {} with new submission {}",
                    previous.job.id(),
                    job_id
                );
            }
            let mut job = Job::new(job_id.clone(), url);
            job.advance(JobPhase::Polling);
            *current = Some(TrackedJob {
                job,
                poller: poller.clone(),
            });
        }

        self.sink.emit(JobEvent::Submitted(job_id.clone()));
        self.sink
            .emit(JobEvent::Progress(ProgressSignal::submitted()));

        if let Err(err) = poller.start() {
            // Unreachable for a freshly built poller; log rather than panic.
            client_error!("Failed to start poller for job {}: {}", job_id, err);
        }

        Ok(job_id)
    }

    /// Cancels the current poller, if any. Used on shutdown and safe to
    /// call at any time.
    pub fn cancel(&self) {
        let current = self.current.lock().expect("current job lock");
        if let Some(tracked) = current.as_ref() {
            tracked.poller.cancel();
        }
    }

    /// Snapshot of the currently tracked job.
    pub fn current_job(&self) -> Option<Job> {
        self.current
            .lock()
            .expect("current job lock")
            .as_ref()
            .map(|tracked| tracked.job.clone())
    }

    /// Poll lifecycle state of the current job's poller.
    pub fn poll_state(&self) -> Option<PollState> {
        self.current
            .lock()
            .expect("current job lock")
            .as_ref()
            .map(|tracked| tracked.poller.state())
    }

    fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.sink.emit(JobEvent::Log {
            message: message.into(),
            level,
        });
    }
}

struct ControllerSubscriber {
    job_id: JobId,
    api: Arc<dyn JobsApi>,
    sink: Arc<dyn EventSink>,
    current: Arc<Mutex<Option<TrackedJob>>>,
}

impl ControllerSubscriber {
    fn advance_current(&self, phase: JobPhase) {
        let mut current = self.current.lock().expect("current job lock");
        if let Some(tracked) = current.as_mut() {
            if tracked.job.id() == &self.job_id {
                tracked.job.advance(phase);
            }
        }
    }

    fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.sink.emit(JobEvent::Log {
            message: message.into(),
            level,
        });
    }
}

#[async_trait::async_trait]
impl PollSubscriber for ControllerSubscriber {
    async fn on_progress(&self, signal: ProgressSignal) {
        self.sink.emit(JobEvent::Progress(signal));
    }

    async fn on_terminal(&self, signal: ProgressSignal, payload: StatusPayload) {
        let failed = signal.failed;
        self.sink.emit(JobEvent::Progress(signal));

        if failed {
            self.advance_current(JobPhase::Failed);
            let reason = payload
                .message
                .clone()
                .unwrap_or_else(|| "Job failed".to_string());
            self.log(LogLevel::Error, format!("Error: {reason}"));
            self.sink.emit(JobEvent::Failed { reason });
            return;
        }

        self.advance_current(JobPhase::Completed);
        self.log(LogLevel::Info, "Transcription finished successfully!");
        if let Some(key) = payload.transcription_key.as_deref() {
            self.log(LogLevel::Info, format!("Artifacts available at: {key}"));
        }

        let artifact = resolve_artifact(&payload, self.api.as_ref()).await;
        self.sink.emit(JobEvent::Completed { artifact, payload });
    }

    async fn on_poll_error(&self, error: ApiError) {
        self.log(LogLevel::Warn, format!("Polling error: {error}"));
    }
}
