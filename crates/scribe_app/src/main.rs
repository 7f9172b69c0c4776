mod logging;
mod render;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use client_logging::{client_error, client_info};
use tokio::sync::mpsc;

use scribe_client::{ChannelEventSink, ClientSettings, HttpJobsApi, JobController, JobEvent};

struct CliArgs {
    source_url: String,
    api_url: Option<String>,
    poll_interval_secs: Option<u64>,
}

fn parse_args(mut args: std::env::Args) -> Result<CliArgs, String> {
    let _program = args.next();
    let mut source_url = None;
    let mut api_url = None;
    let mut poll_interval_secs = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-url" => {
                api_url = Some(args.next().ok_or("--api-url requires a value")?);
            }
            "--poll-interval-secs" => {
                let value = args.next().ok_or("--poll-interval-secs requires a value")?;
                let secs = value
                    .parse()
                    .map_err(|_| format!("invalid poll interval: {value}"))?;
                poll_interval_secs = Some(secs);
            }
            other if source_url.is_none() => source_url = Some(other.to_string()),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    Ok(CliArgs {
        source_url: source_url.ok_or("missing source URL")?,
        api_url,
        poll_interval_secs,
    })
}

fn settings_from(args: &CliArgs) -> ClientSettings {
    let base_url = args
        .api_url
        .clone()
        .or_else(|| std::env::var("SCRIBE_API_URL").ok());
    let mut settings = match base_url {
        Some(base_url) => ClientSettings::for_base_url(base_url),
        None => ClientSettings::default(),
    };
    if let Some(secs) = args.poll_interval_secs {
        settings.poll_interval = Duration::from_secs(secs);
    }
    settings
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::initialize(logging::LogDestination::Both);

    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!(
                "Usage: scribe_app <source-url> [--api-url <url>] [--poll-interval-secs <n>]"
            );
            return ExitCode::FAILURE;
        }
    };

    let settings = settings_from(&args);
    let api = match HttpJobsApi::new(&settings) {
        Ok(api) => Arc::new(api),
        Err(err) => {
            client_error!("Failed to build API client: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let controller = JobController::new(
        api,
        Arc::new(ChannelEventSink::new(tx)),
        settings.poll_interval,
    );

    let started = Utc::now();
    client_info!("Using API at {}", settings.base_url);

    if controller.submit(&args.source_url).await.is_err() {
        // The reason was already emitted on the event channel; drain what
        // is buffered so the user sees it.
        while let Ok(event) = rx.try_recv() {
            render::render_event(&event);
        }
        return ExitCode::FAILURE;
    }

    while let Some(event) = rx.recv().await {
        render::render_event(&event);
        match event {
            JobEvent::Completed { .. } => {
                let elapsed = Utc::now().signed_duration_since(started).num_seconds();
                client_info!("Job finished after {elapsed}s");
                return ExitCode::SUCCESS;
            }
            JobEvent::Failed { .. } => {
                controller.cancel();
                return ExitCode::FAILURE;
            }
            _ => {}
        }
    }

    client_error!("Event channel closed before the job reached a terminal state");
    ExitCode::FAILURE
}
