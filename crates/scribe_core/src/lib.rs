//! Scribe core: pure job-tracking domain, no IO.
mod artifact;
mod job;
mod parser;
mod poll;
mod signal;
mod status;

pub use artifact::Artifact;
pub use job::{Job, JobId, JobPhase};
pub use parser::parse_status;
pub use poll::{InvalidStateError, PollState};
pub use signal::{
    ProgressSignal, BADGE_DONE, BADGE_ERROR, BADGE_PROCESSING, BADGE_TRANSCRIBING,
    CHUNK_PERCENT_CEILING, PERCENT_COMPLETED, PERCENT_PROCESSING_FALLBACK, PERCENT_QUEUED,
};
pub use status::{JobStatus, StatusPayload};
