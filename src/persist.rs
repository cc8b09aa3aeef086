//! Persistence adapter for the client collection.
//!
//! The collection is one JSON array on disk. Reads are fail-open: a missing,
//! unreadable, or malformed document yields the empty collection so the read
//! paths stay available. Writes are fail-closed: the document is replaced
//! atomically (temp file + rename) and any failure propagates.

use crate::error::Result;
use crate::types::Client;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Load the full collection from `path`.
///
/// Fail-open by design: returns the empty collection when the document is
/// absent, unreadable, not valid JSON, or not a JSON array. Never returns
/// an error.
pub fn load(path: &Path) -> Vec<Client> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "client document unreadable, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Client>>(&raw) {
        Ok(clients) => clients,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "client document malformed, starting empty");
            Vec::new()
        }
    }
}

/// Persist the full collection to `path`, replacing the previous document.
///
/// Serializes to pretty-printed JSON, writes to a temp file in the target's
/// directory, then renames over the target so no partial write is ever
/// observable. Write failures propagate.
pub fn save(path: &Path, clients: &[Client]) -> Result<()> {
    let json = serde_json::to_string_pretty(clients)?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
        None => tempfile::NamedTempFile::new_in(".")?,
    };
    tmp.write_all(json.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
