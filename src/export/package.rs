//! Persisting the deck archive returned by the generation server.
//! The bytes are written verbatim; nothing here looks inside the archive.

use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes a package to `path`, replacing any existing file.
pub fn save_package(package: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(package)?;
    info!(path = %path.display(), bytes = package.len(), "Deck package saved");
    Ok(())
}
