//! Sending generation requests and interpreting the server's answer.
//!
//! The server replies with the finished deck archive on success. On failure
//! the body is either a JSON error document or plain text, told apart by the
//! response content type.

pub mod http;

pub use http::HttpTransport;

use crate::error::{Error, Result};
use crate::export::json::to_json_bytes;
use crate::export::package::save_package;
use crate::models::GenerationRequest;
use reqwest::StatusCode;
use std::path::Path;
use tracing::{debug, warn};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// What came back from one POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Carries one serialized payload to the generation server.
pub trait Transport {
    fn post(&self, body: Vec<u8>, content_type: &str) -> Result<TransportResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, body: Vec<u8>, content_type: &str) -> Result<TransportResponse> {
        (**self).post(body, content_type)
    }
}

pub struct GenerationClient<T> {
    transport: T,
}

impl<T: Transport> GenerationClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Sends `request` and returns the archive bytes untouched.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Vec<u8>> {
        let body = to_json_bytes(request)?;
        debug!(
            bytes = body.len(),
            decks = request.decks.len(),
            models = request.models.len(),
            files = request.files.len(),
            "Sending generation request"
        );

        let response = self.transport.post(body, JSON_CONTENT_TYPE)?;
        if response.status != StatusCode::OK {
            warn!(status = %response.status, "Generation failed");
            return Err(Error::Server {
                status: response.status,
                detail: failure_detail(&response),
            });
        }

        debug!(bytes = response.body.len(), "Received deck package");
        Ok(response.body)
    }

    /// Sends `request` and writes the returned archive to `path`.
    pub fn generate_to_path(
        &self,
        request: &GenerationRequest,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let package = self.generate(request)?;
        save_package(&package, path)
    }
}

/// Renders a failed response body for humans: JSON bodies are pretty-printed,
/// anything else is passed through as text.
fn failure_detail(response: &TransportResponse) -> String {
    let is_json = response
        .content_type
        .as_deref()
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(JSON_CONTENT_TYPE));

    if is_json {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&response.body) {
            if let Ok(pretty) = serde_json::to_string_pretty(&value) {
                return pretty;
            }
        }
    }
    String::from_utf8_lossy(&response.body).trim_end().to_string()
}
