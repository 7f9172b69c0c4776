use std::sync::OnceLock;

use regex::Regex;

use crate::signal::{
    ProgressSignal, BADGE_DONE, BADGE_ERROR, BADGE_PROCESSING, BADGE_TRANSCRIBING,
    CHUNK_PERCENT_CEILING, PERCENT_COMPLETED, PERCENT_PROCESSING_FALLBACK, PERCENT_QUEUED,
};
use crate::status::{JobStatus, StatusPayload};

fn chunk_pattern() -> &'static Regex {
    static CHUNK_RE: OnceLock<Regex> = OnceLock::new();
    CHUNK_RE.get_or_init(|| Regex::new(r"Transcribed chunk (\d+)").expect("valid chunk pattern"))
}

/// Turns one raw status payload into a normalized progress signal.
///
/// Pure function, no IO. `previous_percent` is the last percent shown for
/// this job; the returned percent never drops below it, so a progress bar
/// driven by the output never appears to move backward even when the
/// heuristic estimate fluctuates between ticks.
pub fn parse_status(payload: &StatusPayload, previous_percent: u8) -> ProgressSignal {
    match payload.status {
        JobStatus::Completed => ProgressSignal {
            phase_label: "Job Completed!".to_string(),
            badge: BADGE_DONE.to_string(),
            percent: PERCENT_COMPLETED,
            terminal: true,
            failed: false,
        },
        JobStatus::Failed => ProgressSignal {
            phase_label: payload
                .message
                .clone()
                .unwrap_or_else(|| "Job failed".to_string()),
            badge: BADGE_ERROR.to_string(),
            // Do not fabricate progress on failure.
            percent: previous_percent,
            terminal: true,
            failed: true,
        },
        JobStatus::Processing => {
            let signal = parse_processing(payload);
            ProgressSignal {
                percent: signal.percent.max(previous_percent),
                ..signal
            }
        }
        JobStatus::Queued => ProgressSignal {
            phase_label: "Phase 1: Streaming".to_string(),
            badge: BADGE_PROCESSING.to_string(),
            percent: PERCENT_QUEUED.max(previous_percent),
            terminal: false,
            failed: false,
        },
    }
}

fn parse_processing(payload: &StatusPayload) -> ProgressSignal {
    if let (Some(message), Some(total)) = (payload.message.as_deref(), payload.total_chunks) {
        if total > 0 {
            if let Some(chunk) = chunk_number(message) {
                let percent = chunk_percent(chunk, total);
                return ProgressSignal {
                    phase_label: message.to_string(),
                    badge: BADGE_TRANSCRIBING.to_string(),
                    percent,
                    terminal: false,
                    failed: false,
                };
            }
        }
    }

    // No parseable chunk progress: work has started but true progress is
    // unknown, so show a fixed placeholder.
    ProgressSignal {
        phase_label: "Processing...".to_string(),
        badge: BADGE_PROCESSING.to_string(),
        percent: PERCENT_PROCESSING_FALLBACK,
        terminal: false,
        failed: false,
    }
}

fn chunk_number(message: &str) -> Option<u32> {
    chunk_pattern()
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn chunk_percent(chunk: u32, total: u32) -> u8 {
    let ratio = f64::from(chunk) / f64::from(total);
    // Truncate rather than round so the estimate never overstates the work
    // actually done (45/100 chunks reads as 40%, not 41%).
    let scaled = (ratio * f64::from(CHUNK_PERCENT_CEILING)).floor();
    scaled.clamp(0.0, f64::from(CHUNK_PERCENT_CEILING)) as u8
}

#[cfg(test)]
mod tests {
    use super::chunk_number;

    #[test]
    fn extracts_chunk_number_from_progress_message() {
        assert_eq!(chunk_number("Transcribed chunk 45"), Some(45));
        assert_eq!(chunk_number("Transcribed chunk 7 of file x"), Some(7));
    }

    #[test]
    fn ignores_unrelated_messages() {
        assert_eq!(chunk_number("warming up"), None);
        assert_eq!(chunk_number("chunk 4 uploaded"), None);
    }
}
