use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scribe_client::{ApiError, ClientSettings, HttpJobsApi, JobsApi};
use scribe_core::{JobId, JobStatus};

fn api_for(server: &MockServer) -> HttpJobsApi {
    HttpJobsApi::new(&ClientSettings::for_base_url(server.uri())).expect("build client")
}

#[tokio::test]
async fn create_job_posts_url_and_returns_job_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .and(body_json(json!({"url": "https://example.com/ep1.mp3"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobId": "j-42"})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let job_id = api
        .create_job("https://example.com/ep1.mp3")
        .await
        .expect("create job");
    assert_eq!(job_id, JobId::new("j-42"));
}

#[tokio::test]
async fn create_job_surfaces_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .create_job("https://example.com/ep1.mp3")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::HttpStatus {
            status: 502,
            status_text: "Bad Gateway".to_string(),
        }
    );
}

#[tokio::test]
async fn create_job_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .create_job("https://example.com/ep1.mp3")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[tokio::test]
async fn job_status_parses_camel_case_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/j-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobId": "j-42",
            "status": "processing",
            "message": "Transcribed chunk 3",
            "totalChunks": 8,
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let payload = api.job_status(&JobId::new("j-42")).await.expect("status");
    assert_eq!(payload.status, JobStatus::Processing);
    assert_eq!(payload.message.as_deref(), Some("Transcribed chunk 3"));
    assert_eq!(payload.total_chunks, Some(8));
}

#[tokio::test]
async fn fetch_text_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/t.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let body = api
        .fetch_text(&format!("{}/t.txt", server.uri()))
        .await
        .expect("fetch text");
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn fetch_text_surfaces_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.txt"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .fetch_text(&format!("{}/gone.txt", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::HttpStatus { status: 403, .. }));
}
