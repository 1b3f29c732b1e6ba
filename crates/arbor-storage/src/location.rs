//! Storage location resolution
//!
//! Durable files live in a synced directory when the sync layer provides
//! one, otherwise in the platform-local data directory. Resolution never
//! creates directories; callers that intend to write go through
//! [`ensure_dir`].

use std::path::{Path, PathBuf};

use crate::Result;

/// Environment variable through which the cloud-sync layer hands us a
/// synced container directory.
pub const SYNC_DIR_ENV: &str = "ARBOR_SYNC_DIR";

/// Resolve the directory durable files should live in.
///
/// Preference order: the synced directory (if the sync layer exported
/// one), the platform-local data directory, then a `.arbor` directory
/// relative to the working directory.
pub fn resolve_data_dir() -> Option<PathBuf> {
    if let Ok(synced) = std::env::var(SYNC_DIR_ENV) {
        let synced = PathBuf::from(synced);
        if synced.is_dir() {
            return Some(synced);
        }
        tracing::warn!(
            path = %synced.display(),
            "Synced directory is not accessible, falling back to local storage"
        );
    }

    Some(
        dirs::data_local_dir()
            .map(|d| d.join("Arbor"))
            .unwrap_or_else(|| PathBuf::from(".arbor")),
    )
}

/// Create the directory (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

// Simple dirs implementation for common directories
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
