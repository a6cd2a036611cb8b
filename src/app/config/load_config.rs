//! Configuration loading from disk.

use std::path::{Path, PathBuf};

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, LikhitConfig};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "LIKHIT_CONFIG";

/// Config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "likhit.toml";

/// Load configuration.
///
/// Resolution order: `explicit` path, then `LIKHIT_CONFIG`, then
/// `likhit.toml` in `work_dir`, then built-in defaults. Explicitly named
/// files must exist.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<LikhitConfig, AppError> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let path = match named {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            path
        }
        None => {
            let candidate = work_dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!("no config file found, using defaults");
                return Ok(LikhitConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(&path)?;
    parse_config_content(&content)
}
