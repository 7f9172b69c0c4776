use std::fmt;

/// Lifecycle of one polling task.
///
/// `Idle` is the initial state; `Completed`, `Failed` and `Cancelled` are
/// terminal and absorb every later transition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollState {
    #[default]
    Idle,
    Active,
    Completed,
    Failed,
    Cancelled,
}

impl PollState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    /// Idle -> Active. Any other source state is rejected; callers must
    /// cancel a live poller before starting a new one.
    pub fn begin(self) -> Result<Self, InvalidStateError> {
        match self {
            Self::Idle => Ok(Self::Active),
            other => Err(InvalidStateError {
                from: other,
                attempted: "start",
            }),
        }
    }

    /// Active -> Completed|Failed. Returns `None` when the poller is not
    /// active anymore, which makes racing terminal ticks no-ops.
    pub fn finish(self, failed: bool) -> Option<Self> {
        match self {
            Self::Active => Some(if failed { Self::Failed } else { Self::Completed }),
            _ => None,
        }
    }

    /// Any non-terminal state -> Cancelled; idempotent otherwise.
    pub fn cancel(self) -> Self {
        if self.is_terminal() {
            self
        } else {
            Self::Cancelled
        }
    }
}

impl fmt::Display for PollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// An operation was attempted from a state that does not permit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStateError {
    pub from: PollState,
    pub attempted: &'static str,
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot {} a {} poller", self.attempted, self.from)
    }
}

impl std::error::Error for InvalidStateError {}
