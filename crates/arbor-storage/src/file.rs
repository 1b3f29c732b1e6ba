//! Atomic JSON file read/write
//!
//! Files are written pretty-printed for human-diffable sync history.
//! The write goes to a `.tmp` sibling first and is renamed over the
//! target, so a reader either sees the old document or the new one,
//! never a truncated mix.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Result;

/// Write `value` as pretty-printed JSON, replacing `path` atomically.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    std::fs::write(tmp, &bytes)?;
    std::fs::rename(tmp, path)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote JSON file");

    Ok(())
}

/// Read and decode a JSON file. A missing file is `Ok(None)`; a file
/// that exists but fails to read or decode is an error for the caller
/// to absorb.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Some(serde_json::from_slice(&bytes)?))
}
