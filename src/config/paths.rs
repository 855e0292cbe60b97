//! Where hobbylist keeps its files
//!
//! `config.yaml` lives in the config directory and the store file in the data
//! directory. Both come from `ProjectDirs` unless overridden by environment.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Name of the store file inside the data directory
pub const STORE_FILE: &str = "store.json";

const CONFIG_FILE: &str = "config.yaml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "hobbylist")
}

/// `$HOBBYLIST_<var>` if set, else the platform directory picked by `pick`,
/// else `./.hobbylist` when no home directory is known.
fn resolve(var: &str, pick: fn(&ProjectDirs) -> &Path) -> PathBuf {
    if let Some(dir) = std::env::var_os(var).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    project_dirs()
        .map(|dirs| pick(&dirs).to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".hobbylist"))
}

pub fn config_dir() -> PathBuf {
    resolve("HOBBYLIST_CONFIG_DIR", ProjectDirs::config_dir)
}

pub fn data_dir() -> PathBuf {
    resolve("HOBBYLIST_DATA_DIR", ProjectDirs::data_dir)
}

pub fn root_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Store file path: `<data_dir>/store.json`, where `dataDir` from the config
/// takes precedence over the platform data directory
pub fn store_path(configured_dir: Option<&Path>) -> PathBuf {
    match configured_dir {
        Some(dir) => dir.join(STORE_FILE),
        None => data_dir().join(STORE_FILE),
    }
}

/// Create `path` and its parents if missing
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
