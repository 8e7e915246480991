//! Blocking HTTP transport backed by `reqwest`.

use super::{Transport, TransportResponse};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::trace;

pub struct HttpTransport {
    client: Client,
    url: String,
    timestamp: Option<DateTime<Utc>>,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(url.clone(), e))?;
        Ok(Self {
            client,
            url,
            timestamp: None,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = Self::new(config.server_url.clone(), config.timeout)?;
        Ok(match config.timestamp {
            Some(timestamp) => transport.with_timestamp(timestamp),
            None => transport,
        })
    }

    /// Asks the server to stamp the package with `timestamp` instead of its
    /// own clock, which makes repeated generations byte-identical.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn request(&self, body: Vec<u8>, content_type: &str) -> RequestBuilder {
        let request = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        match self.timestamp {
            Some(timestamp) => request.query(&[("timestamp", timestamp_param(timestamp))]),
            None => request,
        }
    }
}

impl Transport for HttpTransport {
    fn post(&self, body: Vec<u8>, content_type: &str) -> Result<TransportResponse> {
        let request = self.request(body, content_type);

        trace!(url = %self.url, "POST generation request");
        let response = request.send().map_err(|e| Error::http(self.url.clone(), e))?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .map_err(|e| Error::http(self.url.clone(), e))?
            .to_vec();
        trace!(%status, bytes = body.len(), "Generation server responded");

        Ok(TransportResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Seconds since the epoch with microsecond precision, e.g. `1704164645.250000`.
/// The sign applies to the whole value, so times before 1970 stay exact.
fn timestamp_param(timestamp: DateTime<Utc>) -> String {
    let micros = timestamp.timestamp_micros();
    let sign = if micros < 0 { "-" } else { "" };
    let micros = micros.unsigned_abs();
    format!("{}{}.{:06}", sign, micros / 1_000_000, micros % 1_000_000)
}
