use scribe_core::{Artifact, JobId, ProgressSignal, StatusPayload};

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// The full contract surface exposed to the presentation layer.
///
/// All presentation state must be derivable from this stream alone, which
/// keeps the tracking core headless-testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    /// A job was created and polling is about to start.
    Submitted(JobId),
    /// A non-terminal status tick, or the final 100% signal.
    Progress(ProgressSignal),
    /// The job completed; artifacts are resolved.
    Completed {
        artifact: Artifact,
        payload: StatusPayload,
    },
    /// The server reported the job as failed.
    Failed { reason: String },
    /// Human-readable console line.
    Log { message: String, level: LogLevel },
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: JobEvent);
}

/// Sink that forwards events into an unbounded channel.
pub struct ChannelEventSink {
    tx: mpsc::UnboundedSender<JobEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::UnboundedSender<JobEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: JobEvent) {
        let _ = self.tx.send(event);
    }
}
