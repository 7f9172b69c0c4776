/// Percent shown while the job waits in the backend queue.
pub const PERCENT_QUEUED: u8 = 10;
/// Placeholder percent when the backend reports processing without any
/// parseable chunk progress.
pub const PERCENT_PROCESSING_FALLBACK: u8 = 20;
/// Ceiling for chunk-derived estimates. 100 is reserved for the completed
/// state so the bar never looks done before the server says so.
pub const CHUNK_PERCENT_CEILING: u8 = 90;
/// Percent of a completed job.
pub const PERCENT_COMPLETED: u8 = 100;

pub const BADGE_PROCESSING: &str = "Processing";
pub const BADGE_TRANSCRIBING: &str = "Phase 2: Transcribing";
pub const BADGE_DONE: &str = "Done";
pub const BADGE_ERROR: &str = "Error";

/// Normalized, UI-ready summary of one status payload.
///
/// Derived fresh per poll tick and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSignal {
    pub phase_label: String,
    pub badge: String,
    pub percent: u8,
    pub terminal: bool,
    pub failed: bool,
}

impl ProgressSignal {
    /// The signal shown right after a successful submission, before the
    /// first poll tick has run.
    pub fn submitted() -> Self {
        Self {
            phase_label: "Phase 1: Streaming".to_string(),
            badge: BADGE_PROCESSING.to_string(),
            percent: PERCENT_QUEUED,
            terminal: false,
            failed: false,
        }
    }
}
