//! Resolution of the on-device storage location. The display locale is
//! fixed (pt-BR / Real), so the only runtime knob is where data lives.

use std::path::PathBuf;

/// Environment override for the storage root, used by tests and scripts.
pub const DATA_DIR_ENV: &str = "GOFINANCES_DATA_DIR";

const APP_DIR_NAME: &str = "gofinances";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Explicit path wins, then the env override, then the platform data
    /// directory, then a relative fallback.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let data_dir = explicit
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME)))
            .unwrap_or_else(|| PathBuf::from(APP_DIR_NAME));
        Self { data_dir }
    }
}
