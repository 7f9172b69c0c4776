use serde::Deserialize;

/// Lifecycle state reported by the backend for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

/// Raw response to one status query.
///
/// Transient: a payload is only held long enough to derive a
/// [`crate::ProgressSignal`] and, on completion, an [`crate::Artifact`].
/// Unknown fields the backend may add are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPayload {
    pub status: JobStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_chunks: Option<u32>,
    #[serde(default)]
    pub download_url_txt: Option<String>,
    #[serde(default)]
    pub download_url_json: Option<String>,
    #[serde(default)]
    pub transcription_key: Option<String>,
}

impl StatusPayload {
    /// Minimal payload carrying only a status, as early polls often return.
    pub fn bare(status: JobStatus) -> Self {
        Self {
            status,
            message: None,
            total_chunks: None,
            download_url_txt: None,
            download_url_json: None,
            transcription_key: None,
        }
    }
}
