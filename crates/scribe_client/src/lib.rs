//! Scribe client: remote job API, polling lifecycle and artifact resolution.
mod api;
mod artifact;
mod controller;
mod error;
mod events;
mod poller;

pub use api::{ClientSettings, HttpJobsApi, JobsApi};
pub use artifact::{resolve_artifact, PREVIEW_FALLBACK, PREVIEW_MAX_CHARS};
pub use controller::JobController;
pub use error::{ApiError, SubmitError};
pub use events::{ChannelEventSink, EventSink, JobEvent, LogLevel};
pub use poller::{JobPoller, PollSubscriber};
