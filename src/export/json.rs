//! JSON import/export for generation requests.
//! The wire payload is plain JSON, so the same functions serve for sending a
//! request and for saving it to disk to inspect or replay later.

use crate::error::Result;
use crate::models::GenerationRequest;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Encodes a request as compact JSON, ready to be used as a request body.
pub fn to_json_bytes(request: &GenerationRequest) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(request)?)
}

/// Exports a request to a pretty-printed JSON file at the specified path.
pub fn export_json_to_path(request: &GenerationRequest, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(request)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    debug!(path = %path.display(), "Request exported");
    Ok(())
}

/// Imports a request from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_json(path: impl AsRef<Path>) -> Result<GenerationRequest> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let request: GenerationRequest = serde_json::from_str(&contents)?;

    debug!(
        path = %path.display(),
        decks = request.decks.len(),
        models = request.models.len(),
        "Request imported"
    );
    Ok(request)
}
