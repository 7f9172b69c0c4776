use crate::status::StatusPayload;

/// Resolved output of a completed job: the server-provided download
/// references plus a best-effort text preview. Created once at completion
/// and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub txt_url: Option<String>,
    pub json_url: Option<String>,
    pub preview: Option<String>,
}

impl Artifact {
    /// Extracts download references from the final payload.
    ///
    /// Only server-provided, pre-authorized URLs are trusted; an absent
    /// field stays absent rather than being reconstructed from a storage
    /// naming convention, which could produce broken or unauthorized links.
    pub fn from_payload(payload: &StatusPayload) -> Self {
        Self {
            txt_url: payload.download_url_txt.clone(),
            json_url: payload.download_url_json.clone(),
            preview: None,
        }
    }

    pub fn with_preview(self, preview: impl Into<String>) -> Self {
        Self {
            preview: Some(preview.into()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Artifact;
    use crate::status::{JobStatus, StatusPayload};

    #[test]
    fn references_come_only_from_the_payload() {
        let payload = StatusPayload {
            download_url_txt: Some("https://x/t.txt".to_string()),
            transcription_key: Some("transcriptions/j-1/transcription.txt".to_string()),
            ..StatusPayload::bare(JobStatus::Completed)
        };
        let artifact = Artifact::from_payload(&payload);
        assert_eq!(artifact.txt_url.as_deref(), Some("https://x/t.txt"));
        // No json URL in the payload, so no json reference is guessed from
        // the transcription key.
        assert_eq!(artifact.json_url, None);
        assert_eq!(artifact.preview, None);
    }
}
