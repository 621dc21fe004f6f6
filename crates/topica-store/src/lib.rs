mod config;
mod slots;

pub use config::{parse_value, read_config, write_config, Settings, CONFIG_FILE};
pub use slots::{clear_blocks, load_blocks, save_blocks, slot_path, validate_slot_key, DEFAULT_SLOT};

use fs2::FileExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the store root.
pub const HOME_ENV: &str = "TOPICA_HOME";

/// Return the per-user store root.
///
/// `$TOPICA_HOME` wins; otherwise `<data_dir>/topica`, falling back to
/// `~/.topica` and finally `.topica-store` in the working directory.
pub fn store_root() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        PathBuf::from(dir)
    } else if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("topica")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".topica")
    } else {
        PathBuf::from(".topica-store")
    }
}

/// Atomic write: write to temp file in same dir, then rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("no parent dir for {}", path.display()))?;
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}

/// File-based exclusive lock guard, released on drop.
pub struct LockGuard {
    _file: fs::File,
}

/// Acquire an exclusive file lock. Creates the lock file if needed.
pub fn lock_file(path: &Path) -> anyhow::Result<LockGuard> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;
    file.lock_exclusive()?;
    Ok(LockGuard { _file: file })
}
