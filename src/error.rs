//! Error handling.

use reqwest::StatusCode;

/// Our result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while sending a request or storing its result.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The request could not be encoded, or a stored payload could not be decoded.
    #[error("invalid generation request JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP exchange itself failed.
    #[error("could not reach the generation server at {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("generation server returned {status}: {detail}")]
    Server { status: StatusCode, detail: String },

    /// An environment setting could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    Config { name: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn http<S: Into<String>>(url: S, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }
}
