use clap::Subcommand;
use std::path::Path;
use topica_store::{parse_value, read_config, write_config, CONFIG_FILE};

// ── CLI Schema ──

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Set a config value
    Set {
        /// Config key (rules, slot, color)
        key: String,
        /// Config value (true/false/number/string)
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
}

/// Keys Topica reads; others are stored but have no effect.
const KNOWN_KEYS: &[&str] = &["rules", "slot", "color"];

// ── Dispatch ──

pub fn run(cmd: ConfigCmd, root: &Path) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Set { key, value } => set(root, &key, &value),
        ConfigCmd::Get { key } => get(root, &key),
        ConfigCmd::List => list(root),
    }
}

// ── Command Implementations ──

/// `topica config set <key> <value>`
pub fn set(root: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    if !KNOWN_KEYS.contains(&key) {
        tracing::warn!(key, "unknown config key");
        eprintln!("warning: '{key}' is not a recognized key ({})", KNOWN_KEYS.join(", "));
    }
    let parsed = parse_value(value);
    match key {
        "slot" => topica_store::validate_slot_key(value)?,
        "color" if !parsed.is_boolean() => anyhow::bail!("color must be true or false"),
        _ => {}
    }
    let path = root.join(CONFIG_FILE);
    let mut config = read_config(&path)?;
    // Paths stay strings even when they look numeric.
    let stored = if key == "rules" {
        serde_json::Value::String(value.to_string())
    } else {
        parsed
    };
    config.insert(key.to_string(), stored);
    write_config(&path, &config)?;
    println!("{key} = {value}");
    Ok(())
}

/// `topica config get <key>`
pub fn get(root: &Path, key: &str) -> anyhow::Result<()> {
    let config = read_config(&root.join(CONFIG_FILE))?;
    match config.get(key) {
        Some(val) => println!("{val}"),
        None => println!("(not set)"),
    }
    Ok(())
}

/// `topica config list`
pub fn list(root: &Path) -> anyhow::Result<()> {
    let config = read_config(&root.join(CONFIG_FILE))?;
    if config.is_empty() {
        println!("(no config set)");
    } else {
        for (k, v) in &config {
            println!("{k} = {v}");
        }
    }
    Ok(())
}
