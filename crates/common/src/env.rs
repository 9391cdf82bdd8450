//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Ensure the directory holding a file-backed SQLite database exists.
/// Non-SQLite and in-memory URLs are left alone.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    let Some(dir) = sqlite_parent_dir(database_url) else {
        debug!("database url needs no local directory");
        return Ok(());
    };
    if tokio::fs::metadata(&dir).await.is_err() {
        warn!(dir = %dir.display(), "database directory not found; creating it");
    }
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}

/// Directory part of a `sqlite:` URL pointing at a file, if any.
pub fn sqlite_parent_dir(database_url: &str) -> Option<PathBuf> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    match Path::new(path).parent() {
        Some(p) if !p.as_os_str().is_empty() => Some(p.to_path_buf()),
        _ => None,
    }
}
