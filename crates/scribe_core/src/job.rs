use std::fmt;

/// Opaque server-assigned job identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotone lifecycle of a tracked job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JobPhase {
    Submitted,
    Polling,
    Completed,
    Failed,
}

/// One tracked transcription request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    id: JobId,
    source_url: String,
    phase: JobPhase,
}

impl Job {
    pub fn new(id: JobId, source_url: impl Into<String>) -> Self {
        Self {
            id,
            source_url: source_url.into(),
            phase: JobPhase::Submitted,
        }
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    /// Advances the lifecycle. Backward moves are silently refused so the
    /// phase stays monotone whatever order updates arrive in.
    pub fn advance(&mut self, next: JobPhase) -> bool {
        // Completed and Failed are parallel terminals, not an ordering.
        if self.phase >= JobPhase::Completed || next <= self.phase {
            return false;
        }
        self.phase = next;
        true
    }
}
