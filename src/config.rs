//! Client settings read from the environment.
//!
//! - `GENANKI_SERVER_URL`: generation server endpoint (default `http://localhost:8000`)
//! - `GENANKI_TIMEOUT_SECS`: request timeout in seconds (default 30)
//! - `GENANKI_TIMESTAMP`: RFC 3339 time stamped into the package; the server
//!   uses its own clock when unset
//! - `GENANKI_OUTPUT`: where the example program writes the package (default `test.apkg`)

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTPUT: &str = "test.apkg";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub server_url: String,
    pub timeout: Duration,
    pub timestamp: Option<DateTime<Utc>>,
    pub output: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            timestamp: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ClientConfig {
    /// Reads the configuration from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any name-to-value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("GENANKI_SERVER_URL") {
            config.server_url = url;
        }

        if let Some(value) = lookup("GENANKI_TIMEOUT_SECS") {
            let secs = value.trim().parse::<u64>().map_err(|_| Error::Config {
                name: "GENANKI_TIMEOUT_SECS",
                value: value.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(value) = lookup("GENANKI_TIMESTAMP") {
            let timestamp = DateTime::parse_from_rfc3339(value.trim()).map_err(|_| Error::Config {
                name: "GENANKI_TIMESTAMP",
                value: value.clone(),
            })?;
            config.timestamp = Some(timestamp.with_timezone(&Utc));
        }

        if let Some(output) = lookup("GENANKI_OUTPUT") {
            config.output = PathBuf::from(output);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.server_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.timestamp.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("GENANKI_SERVER_URL", "http://anki:9000/"),
            ("GENANKI_TIMEOUT_SECS", "5"),
            ("GENANKI_TIMESTAMP", "2024-01-02T03:04:05Z"),
            ("GENANKI_OUTPUT", "out/deck.apkg"),
        ]))
        .unwrap();

        assert_eq!(config.server_url, "http://anki:9000/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.timestamp.unwrap().timestamp(), 1704164645);
        assert_eq!(config.output, PathBuf::from("out/deck.apkg"));
    }

    #[test]
    fn test_bad_timeout() {
        let result = ClientConfig::from_lookup(lookup_from(&[("GENANKI_TIMEOUT_SECS", "soon")]));
        assert!(matches!(
            result,
            Err(Error::Config { name: "GENANKI_TIMEOUT_SECS", .. })
        ));
    }

    #[test]
    fn test_bad_timestamp() {
        let result = ClientConfig::from_lookup(lookup_from(&[("GENANKI_TIMESTAMP", "yesterday")]));
        assert!(result.is_err());
    }
}
