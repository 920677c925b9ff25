//! Platform paths for folio.
//!
//! Resolved via `AppPaths` from the version-migrate crate (XDG on Linux and
//! macOS, the platform default on Windows).
//!
//! ```text
//! ~/.config/folio/          # Config directory
//! └── config.toml
//!
//! ~/.local/share/folio/     # Data directory
//! └── store/                # Snapshot store (portfolioData.json)
//! ```

use std::path::PathBuf;
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct FolioPaths;

impl FolioPaths {
    fn app_paths() -> AppPaths {
        AppPaths::new("folio")
    }

    pub fn config_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .config_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    pub fn data_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .data_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Path to `config.toml`. The file may not exist.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory of the snapshot store, unless overridden in config.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_nested_under_app_dirs() {
        // Home may be missing in sandboxed CI; only check layout when it resolves.
        if let (Ok(config_dir), Ok(data_dir)) = (FolioPaths::config_dir(), FolioPaths::data_dir()) {
            assert_eq!(FolioPaths::config_file().unwrap(), config_dir.join("config.toml"));
            assert_eq!(FolioPaths::store_dir().unwrap(), data_dir.join("store"));
        }
    }
}
