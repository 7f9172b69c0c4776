use std::time::Duration;

use serde::{Deserialize, Serialize};

use scribe_core::{JobId, StatusPayload};

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the transcription API, without a trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Delay between status polls for one job.
    pub poll_interval: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(5),
        }
    }
}

impl ClientSettings {
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateJobRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateJobResponse {
    job_id: String,
}

/// Remote transcription API seam.
///
/// The poller and controller only see this trait, so tests drive them with
/// in-memory implementations and no wall-clock network.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    /// `POST {base}/jobs` with the source URL; returns the assigned job id.
    async fn create_job(&self, url: &str) -> Result<JobId, ApiError>;

    /// `GET {base}/jobs/{jobId}`; one status query.
    async fn job_status(&self, job_id: &JobId) -> Result<StatusPayload, ApiError>;

    /// Plain GET of a server-provided artifact URL, returning the body text.
    async fn fetch_text(&self, url: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpJobsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJobsApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn read_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl JobsApi for HttpJobsApi {
    async fn create_job(&self, url: &str) -> Result<JobId, ApiError> {
        let response = self
            .client
            .post(format!("{}/jobs", self.base_url))
            .json(&CreateJobRequest { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = Self::read_success(response)?;
        let body: CreateJobResponse = response
            .json()
            .await
            .map_err(|err| ApiError::Malformed(err.to_string()))?;
        Ok(JobId::new(body.job_id))
    }

    async fn job_status(&self, job_id: &JobId) -> Result<StatusPayload, ApiError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}", self.base_url, job_id))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = Self::read_success(response)?;
        response
            .json()
            .await
            .map_err(|err| ApiError::Malformed(err.to_string()))
    }

    async fn fetch_text(&self, url: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = Self::read_success(response)?;
        response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Transport(format!("timeout: {err}"));
    }
    ApiError::Transport(err.to_string())
}
