use client_logging::client_warn;

use scribe_core::{Artifact, StatusPayload};

use crate::api::JobsApi;

/// Character cap for the transcript preview.
pub const PREVIEW_MAX_CHARS: usize = 1000;
const TRUNCATION_MARKER: &str = "...";

/// Shown when the text artifact exists but its content could not be read.
pub const PREVIEW_FALLBACK: &str =
    "Transcription ready. Download the transcript files to view the full text.";

/// Resolves the completion artifacts for a finished job.
///
/// Download references come straight from the payload. The preview is
/// best-effort: one fetch of the text artifact, truncated to
/// [`PREVIEW_MAX_CHARS`]; a fetch failure is warn-logged and replaced with
/// a static fallback, never surfaced as a job failure.
pub async fn resolve_artifact(payload: &StatusPayload, api: &dyn JobsApi) -> Artifact {
    let artifact = Artifact::from_payload(payload);
    let Some(txt_url) = artifact.txt_url.clone() else {
        return artifact;
    };
    match api.fetch_text(&txt_url).await {
        Ok(body) => artifact.with_preview(truncate_preview(&body)),
        Err(err) => {
            client_warn!("Could not load preview from {}: {}", txt_url, err);
            artifact.with_preview(PREVIEW_FALLBACK)
        }
    }
}

fn truncate_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_MAX_CHARS) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], TRUNCATION_MARKER),
    }
}
