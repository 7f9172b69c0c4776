//! Terminal rendering of the job event stream.

use scribe_client::{JobEvent, LogLevel};
use scribe_core::ProgressSignal;

const BAR_CELLS: usize = 20;

pub fn render_event(event: &JobEvent) {
    match event {
        JobEvent::Submitted(job_id) => {
            println!("> Tracking job {job_id}");
        }
        JobEvent::Progress(signal) => {
            println!("{}", progress_line(signal));
        }
        JobEvent::Completed { artifact, .. } => {
            println!("> Transcription artifacts:");
            println!("    text: {}", link_or_unavailable(artifact.txt_url.as_deref()));
            println!("    json: {}", link_or_unavailable(artifact.json_url.as_deref()));
            if let Some(preview) = artifact.preview.as_deref() {
                println!("> Preview:");
                for line in preview.lines() {
                    println!("    {line}");
                }
            }
        }
        JobEvent::Failed { reason } => {
            println!("> Job failed: {reason}");
        }
        JobEvent::Log { message, level } => {
            println!("> {message}");
            match level {
                LogLevel::Info => log::info!("{message}"),
                LogLevel::Warn => log::warn!("{message}"),
                LogLevel::Error => log::error!("{message}"),
            }
        }
    }
}

fn link_or_unavailable(url: Option<&str>) -> &str {
    url.unwrap_or("(not provided by the server)")
}

fn progress_line(signal: &ProgressSignal) -> String {
    let filled = usize::from(signal.percent) * BAR_CELLS / 100;
    let bar: String = (0..BAR_CELLS)
        .map(|cell| if cell < filled { '#' } else { '.' })
        .collect();
    format!(
        "[{bar}] {:>3}% {} ({})",
        signal.percent, signal.phase_label, signal.badge
    )
}

#[cfg(test)]
mod tests {
    use super::progress_line;
    use scribe_core::ProgressSignal;

    #[test]
    fn progress_line_scales_the_bar() {
        let signal = ProgressSignal {
            phase_label: "Transcribed chunk 45".to_string(),
            badge: "Phase 2: Transcribing".to_string(),
            percent: 40,
            terminal: false,
            failed: false,
        };
        let line = progress_line(&signal);
        assert!(line.starts_with("[########............]"));
        assert!(line.contains("40%"));
        assert!(line.contains("Transcribed chunk 45"));
    }
}
