//! Outbound batch request and response interpretation.
//!
//! The processing endpoint accepts one multipart body with a repeated
//! file field and answers with JSON:
//!
//! ```json
//! { "status": "success", "image_data": "data:image/png;base64,..." }
//! { "status": "error", "detail": "human readable message" }
//! ```
//!
//! A non-2xx status is a failure regardless of the body; the body is only
//! consulted for a better message.

use serde::Deserialize;

use crate::types::{FileHandle, ImageData, Selection, SessionConfig, UploadError, UploadResult};

/// Message used when the server reports failure without a usable detail.
pub const GENERIC_FAILURE: &str = "Image processing failed.";

/// A batch upload ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Endpoint URL including any layout query parameters.
    pub url: String,
    /// Multipart field name shared by every file part.
    pub field_name: String,
    /// Files in selection order, one part each.
    pub files: Vec<FileHandle>,
}

impl UploadRequest {
    /// Build the request for `selection` under `config`.
    #[must_use]
    pub fn new(config: &SessionConfig, selection: &Selection) -> Self {
        Self {
            url: config.request_url(),
            field_name: config.field_name.clone(),
            files: selection.files().to_vec(),
        }
    }
}

/// What came back from the transport: a status code and the body text,
/// if one could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, if present and readable as text.
    pub body: Option<String>,
}

impl RawResponse {
    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// JSON body returned by the processing endpoint.
///
/// Every field is optional so that partial or error bodies still parse.
#[derive(Debug, Deserialize)]
struct ResponseBody {
    status: Option<String>,
    image_data: Option<String>,
    /// A string for application errors; framework-level validation errors
    /// may put a structured value here instead.
    detail: Option<serde_json::Value>,
}

impl ResponseBody {
    fn parse(body: Option<&str>) -> Option<Self> {
        serde_json::from_str(body?).ok()
    }

    fn detail(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_owned)
    }
}

/// Turn a raw response into the outcome of the submission.
#[must_use]
pub fn interpret_response(response: &RawResponse) -> UploadResult {
    let body = ResponseBody::parse(response.body.as_deref());

    if !response.is_success() {
        let message = body
            .as_ref()
            .and_then(ResponseBody::detail)
            .unwrap_or_else(|| format!("Server error: {}", response.status));
        return UploadResult::Failure {
            error: UploadError::Server {
                status: response.status,
                message,
            },
        };
    }

    let Some(body) = body else {
        return UploadResult::Failure {
            error: UploadError::Application(String::from(
                "The server returned an unreadable response.",
            )),
        };
    };

    let detail = body.detail();
    match (body.status.as_deref(), body.image_data) {
        (Some("success"), Some(image_data)) => UploadResult::Success {
            image_data: ImageData::new(image_data),
        },
        _ => UploadResult::Failure {
            error: UploadError::Application(
                detail.unwrap_or_else(|| GENERIC_FAILURE.to_owned()),
            ),
        },
    }
}
