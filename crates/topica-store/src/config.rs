use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the flat key/value config under the store root.
pub const CONFIG_FILE: &str = "config.json";

/// Read config from `<root>/config.json`. Returns empty map if file doesn't exist.
pub fn read_config(path: &Path) -> anyhow::Result<serde_json::Map<String, serde_json::Value>> {
    if !path.exists() {
        return Ok(serde_json::Map::new());
    }
    let content = std::fs::read_to_string(path)?;
    let val: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("config {} is not valid JSON", path.display()))?;
    match val {
        serde_json::Value::Object(map) => Ok(map),
        _ => Ok(serde_json::Map::new()),
    }
}

pub fn write_config(
    path: &Path,
    config: &serde_json::Map<String, serde_json::Value>,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    crate::write_atomic(path, json.as_bytes())
}

/// Parse a string value into an appropriate JSON value (bool/number/string).
pub fn parse_value(s: &str) -> serde_json::Value {
    match s {
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        _ => {
            if let Ok(n) = s.parse::<i64>() {
                serde_json::Value::Number(n.into())
            } else if let Ok(f) = s.parse::<f64>() {
                serde_json::json!(f)
            } else {
                serde_json::Value::String(s.to_string())
            }
        }
    }
}

/// Typed view of the keys Topica reads from config. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Path to a YAML rule table replacing the built-in one.
    #[serde(default)]
    pub rules: Option<PathBuf>,
    /// Default slot key for save/show/search/clear.
    #[serde(default)]
    pub slot: Option<String>,
    /// Force colored output on or off.
    #[serde(default)]
    pub color: Option<bool>,
}

impl Settings {
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let path = root.join(CONFIG_FILE);
        let map = read_config(&path)?;
        serde_json::from_value(serde_json::Value::Object(map))
            .with_context(|| format!("invalid setting in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_picks_json_types() {
        assert_eq!(parse_value("true"), serde_json::json!(true));
        assert_eq!(parse_value("42"), serde_json::json!(42));
        assert_eq!(parse_value("1.5"), serde_json::json!(1.5));
        assert_eq!(parse_value("rules.yaml"), serde_json::json!("rules.yaml"));
    }

    #[test]
    fn missing_config_is_default_settings() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(tmp.path()).unwrap(), Settings::default());
    }

    #[test]
    fn settings_round_trip_through_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        let mut map = serde_json::Map::new();
        map.insert("rules".into(), parse_value("/etc/topica/rules.yaml"));
        map.insert("slot".into(), parse_value("work"));
        map.insert("color".into(), parse_value("false"));
        map.insert("unrelated".into(), parse_value("7"));
        write_config(&path, &map).unwrap();

        assert_eq!(read_config(&path).unwrap(), map);
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.rules, Some(PathBuf::from("/etc/topica/rules.yaml")));
        assert_eq!(settings.slot.as_deref(), Some("work"));
        assert_eq!(settings.color, Some(false));
    }

    #[test]
    fn mistyped_setting_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let mut map = serde_json::Map::new();
        map.insert("color".into(), parse_value("sometimes"));
        write_config(&tmp.path().join(CONFIG_FILE), &map).unwrap();
        assert!(Settings::load(tmp.path()).is_err());
    }
}
