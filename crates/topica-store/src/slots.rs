use anyhow::Context;
use std::path::{Path, PathBuf};
use topica_core::SemanticBlock;

/// Slot key used when neither the CLI nor config names one.
pub const DEFAULT_SLOT: &str = "chat_organizer_blocks";

/// Reject keys that could escape `slots/` or collide with lock files.
pub fn validate_slot_key(key: &str) -> anyhow::Result<()> {
    if key.is_empty() {
        anyhow::bail!("slot key must not be empty");
    }
    if key.starts_with('.') {
        anyhow::bail!("slot key must not start with '.': {key}");
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        anyhow::bail!("slot key contains invalid character {bad:?}: {key}");
    }
    Ok(())
}

/// `<root>/slots/<key>.json`
pub fn slot_path(root: &Path, key: &str) -> anyhow::Result<PathBuf> {
    validate_slot_key(key)?;
    Ok(root.join("slots").join(format!("{key}.json")))
}

fn slot_lock_path(root: &Path, key: &str) -> PathBuf {
    root.join("slots").join(format!("{key}.lock"))
}

/// Persist blocks verbatim to a slot, replacing its previous contents.
pub fn save_blocks(root: &Path, key: &str, blocks: &[SemanticBlock]) -> anyhow::Result<PathBuf> {
    let path = slot_path(root, key)?;
    let _lock = crate::lock_file(&slot_lock_path(root, key))?;
    let data = serde_json::to_string_pretty(blocks)?;
    crate::write_atomic(&path, data.as_bytes())
        .with_context(|| format!("failed to write slot {}", path.display()))?;
    tracing::debug!(slot = key, blocks = blocks.len(), "saved blocks");
    Ok(path)
}

/// Rehydrate a slot. Returns `None` when nothing has been saved under `key`.
pub fn load_blocks(root: &Path, key: &str) -> anyhow::Result<Option<Vec<SemanticBlock>>> {
    let path = slot_path(root, key)?;
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read slot {}", path.display()))?;
    let blocks: Vec<SemanticBlock> = serde_json::from_str(&content)
        .with_context(|| format!("slot {} is not a block list", path.display()))?;
    Ok(Some(blocks))
}

/// Remove a slot. Returns whether anything was there.
pub fn clear_blocks(root: &Path, key: &str) -> anyhow::Result<bool> {
    let path = slot_path(root, key)?;
    let _lock = crate::lock_file(&slot_lock_path(root, key))?;
    match std::fs::remove_file(&path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to remove slot {}", path.display())),
    }
}
