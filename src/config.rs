//! Data locations.
//!
//! Every path is resolved once at startup and handed to the engine
//! explicitly. Lookup order for each location:
//!
//! 1. An explicit override (`--store`, `--calendar`, or their environment variables)
//! 2. `data/` under the working directory, if it exists
//! 3. The per-user data directory, e.g. `~/.local/share/orthofetch/` on Linux

use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application directory name under the user data directory
pub const APP_DIR: &str = "orthofetch";

/// Default calendar file name
pub const CALENDAR_FILE: &str = "orthodox_calendar_2026.txt";

/// Default verse store directory name
pub const STORE_DIR: &str = "bible";

/// Resolved data locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub store_dir: PathBuf,
    pub calendar_file: PathBuf,
}

impl DataPaths {
    /// Resolve data locations from optional overrides
    pub fn resolve(store: Option<PathBuf>, calendar: Option<PathBuf>) -> Self {
        let local = Path::new("data");
        let user = BaseDirs::new().map(|dirs| dirs.data_dir().join(APP_DIR));

        let paths = Self {
            store_dir: store.unwrap_or_else(|| pick(local, user.as_deref(), STORE_DIR)),
            calendar_file: calendar.unwrap_or_else(|| pick(local, user.as_deref(), CALENDAR_FILE)),
        };

        debug!(
            store = %paths.store_dir.display(),
            calendar = %paths.calendar_file.display(),
            "Resolved data paths"
        );
        paths
    }
}

fn pick(local: &Path, user: Option<&Path>, name: &str) -> PathBuf {
    let candidate = local.join(name);
    if candidate.exists() {
        return candidate;
    }
    match user {
        Some(dir) => dir.join(name),
        None => candidate,
    }
}
