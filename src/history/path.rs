use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "howto";
const FALLBACK_DIR: &str = ".howto";
const FILE_NAME: &str = "howto-history.json";

/// Returns the history file path, creating its directory if needed.
pub fn history_path() -> Result<PathBuf> {
    let dir = history_dir(dirs::config_dir(), dirs::home_dir())?;

    if !dir.exists() {
        create_private_dir(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    Ok(dir.join(FILE_NAME))
}

/// The per-user config directory when the platform has one, otherwise
/// a dot-directory in the home directory.
fn history_dir(config_dir: Option<PathBuf>, home_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(config_dir) = config_dir {
        return Ok(config_dir.join(APP_DIR));
    }

    home_dir
        .map(|home| home.join(FALLBACK_DIR))
        .ok_or_else(|| anyhow!("Could not find home directory"))
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}
