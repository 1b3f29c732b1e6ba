//! Application configuration

use std::path::PathBuf;

use arbor_session::SESSION_FILE_NAME;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory all durable files live in.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE_NAME)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(arbor_storage::resolve_data_dir().unwrap_or_else(|| PathBuf::from(".arbor")))
    }
}
