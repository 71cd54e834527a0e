/// Client for the presentation generation service
///
/// The service is a single HTTP endpoint: it receives the project details
/// plus the base64-encoded images, analyzes the photos, assembles the
/// slide deck, and answers with a download reference. This codebase treats
/// it as a black box and only speaks its request/response contract.
///
/// When no endpoint is configured the client runs in simulated mode: a
/// fixed delay followed by a synthetic successful result, which keeps the
/// whole wizard usable without a deployed backend.

use serde::Serialize;
use thiserror::Error;

use crate::state::project::{EncodedImage, ProcessingResult, ProjectDetails};

/// Deployed generation endpoint.
///
/// Set this to the function URL once deployed. `None` selects the
/// built-in simulated mode.
pub const ENDPOINT: Option<&str> = None;

/// Delay used by the simulated mode before answering
const SIMULATED_DELAY_MS: u64 = 1000;

/// Request body sent to the generation service
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub project_name: String,
    pub client_name: String,
    pub date_range: String,
    /// Always present on the wire, empty string when the user left it blank
    pub highlights: String,
    /// Ordered upload payload, base64 data with no data-URI prefix
    pub images: Vec<EncodedImage>,
}

impl GenerateRequest {
    /// Assemble the request from the session record's parts
    pub fn new(details: &ProjectDetails, images: &[EncodedImage]) -> Self {
        Self {
            project_name: details.project_name.clone(),
            client_name: details.client_name.clone(),
            date_range: details.date_range.clone(),
            highlights: details.highlights.clone(),
            images: images.to_vec(),
        }
    }
}

/// Failure of the single outbound generation call
///
/// There is no retry policy: any of these is terminal for the attempt and
/// the user restarts the processing stage explicitly.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Service rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Generation failed: {0}")]
    Generation(String),
}

/// Issue the generation call, remote or simulated depending on [`ENDPOINT`]
pub async fn generate(request: GenerateRequest) -> Result<ProcessingResult, ServiceError> {
    match ENDPOINT {
        Some(endpoint) => generate_remote(endpoint, request).await,
        None => Ok(generate_simulated(request).await),
    }
}

/// POST the request to the deployed service and parse its answer.
///
/// Non-2xx statuses and `success: false` bodies both surface as errors,
/// so the caller only ever sees a usable result or a message to display.
pub async fn generate_remote(
    endpoint: &str,
    request: GenerateRequest,
) -> Result<ProcessingResult, ServiceError> {
    println!(
        "📤 Sending {} images to the generation service",
        request.images.len()
    );

    let client = reqwest::Client::new();
    let response = client.post(endpoint).json(&request).send().await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ServiceError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    let result: ProcessingResult = response.json().await?;
    if !result.success {
        return Err(ServiceError::Generation(result.message));
    }

    println!("✅ Presentation ready: {}", result.presentation_filename);

    Ok(result)
}

/// Simulated backend: fixed delay, synthetic success
async fn generate_simulated(request: GenerateRequest) -> ProcessingResult {
    tokio::time::sleep(std::time::Duration::from_millis(SIMULATED_DELAY_MS)).await;

    let now = chrono::Utc::now();
    let result = ProcessingResult {
        success: true,
        project_id: format!("demo-{}", now.timestamp_millis()),
        presentation_filename: format!(
            "{}_{}.pptx",
            underscored(&request.project_name),
            now.format("%Y-%m-%d")
        ),
        download_url: "#".to_string(),
        message: "Presentation generated successfully!".to_string(),
    };

    println!("✅ Simulated presentation: {}", result.presentation_filename);

    result
}

/// Collapse whitespace runs into single underscores for filenames
fn underscored(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> GenerateRequest {
        GenerateRequest {
            project_name: "Oakwood Mall Renovation".to_string(),
            client_name: "Prime Properties Inc.".to_string(),
            date_range: "Week of August 18, 2025".to_string(),
            highlights: String::new(),
            images: vec![EncodedImage {
                filename: "site.jpg".to_string(),
                data: "aGVsbG8=".to_string(),
            }],
        }
    }

    #[test]
    fn test_request_serializes_with_the_wire_field_names() {
        let value = serde_json::to_value(request()).unwrap();

        assert_eq!(value["project_name"], "Oakwood Mall Renovation");
        assert_eq!(value["client_name"], "Prime Properties Inc.");
        assert_eq!(value["date_range"], "Week of August 18, 2025");
        assert_eq!(value["highlights"], "");
        assert_eq!(value["images"][0]["filename"], "site.jpg");
        assert_eq!(value["images"][0]["data"], "aGVsbG8=");
    }

    #[test]
    fn test_underscored_collapses_whitespace() {
        assert_eq!(underscored("Oakwood Mall Renovation"), "Oakwood_Mall_Renovation");
        assert_eq!(underscored("  spaced   out  "), "spaced_out");
    }

    #[tokio::test]
    async fn test_successful_call_returns_the_parsed_result() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "success": true,
            "project_id": "proj-42",
            "presentation_filename": "Oakwood_Mall_Renovation_2025-08-18.pptx",
            "download_url": "https://storage.example.com/file.pptx",
            "message": "Presentation generated successfully!"
        });

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = generate_remote(&server.uri(), request())
            .await
            .expect("call should succeed");

        assert_eq!(result.project_id, "proj-42");
        assert_eq!(
            result.download_url,
            "https://storage.example.com/file.pptx"
        );
    }

    #[tokio::test]
    async fn test_rejected_status_surfaces_as_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal server error"))
            .mount(&server)
            .await;

        let error = generate_remote(&server.uri(), request())
            .await
            .expect_err("500 must fail");

        match error {
            ServiceError::Rejected { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal server error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unsuccessful_body_surfaces_its_message() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "success": false,
            "project_id": "",
            "presentation_filename": "",
            "download_url": "",
            "message": "No images could be analyzed"
        });

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let error = generate_remote(&server.uri(), request())
            .await
            .expect_err("success=false must fail");

        match error {
            ServiceError::Generation(message) => {
                assert_eq!(message, "No images could be analyzed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_simulated_mode_builds_a_dated_filename() {
        let result = generate_simulated(request()).await;

        assert!(result.success);
        assert!(result.project_id.starts_with("demo-"));
        assert!(result
            .presentation_filename
            .starts_with("Oakwood_Mall_Renovation_"));
        assert!(result.presentation_filename.ends_with(".pptx"));
    }
}
