use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::entity::EntityKind;
use crate::error::{Error, Result};
use crate::io;
use crate::paths;
use crate::scene::{CollisionPolicy, SceneSettings};

/// Root configuration structure for renamer.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RenamerConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via renamer.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Entity kind used when a command does not pass `--kind`.
    #[serde(default)]
    pub kind: EntityKind,

    #[serde(default = "default_sequence_start")]
    pub sequence_start: String,

    #[serde(default)]
    pub collision: CollisionPolicy,

    #[serde(default = "default_protected_shape_key")]
    pub protected_shape_key: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            kind: EntityKind::default(),
            sequence_start: default_sequence_start(),
            collision: CollisionPolicy::default(),
            protected_shape_key: default_protected_shape_key(),
        }
    }
}

impl Defaults {
    pub fn scene_settings(&self) -> SceneSettings {
        SceneSettings {
            collision: self.collision,
            protected_shape_key: self.protected_shape_key.clone(),
        }
    }
}

/// Keys accepted by `config set`.
pub const KEYS: &[&str] = &["kind", "sequence_start", "collision", "protected_shape_key"];

impl RenamerConfig {
    /// Set one key from its string form, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let invalid = |problem: String| Error::config_invalid_value(key, Some(value.to_string()), problem);

        match key {
            "kind" => {
                self.defaults.kind = EntityKind::from_str(value).map_err(|_| {
                    invalid(format!(
                        "expected one of: {}",
                        EntityKind::ALL.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", ")
                    ))
                })?;
            }
            "sequence_start" => {
                if value.is_empty() {
                    return Err(invalid("sequence start cannot be empty".to_string()));
                }
                self.defaults.sequence_start = value.to_string();
            }
            "collision" => {
                self.defaults.collision = CollisionPolicy::from_str(value)
                    .ok_or_else(|| invalid("expected 'suffix' or 'error'".to_string()))?;
            }
            "protected_shape_key" => {
                if value.is_empty() {
                    return Err(invalid("shape key name cannot be empty".to_string()));
                }
                self.defaults.protected_shape_key = value.to_string();
            }
            _ => {
                return Err(Error::config_invalid_value(
                    key,
                    None,
                    format!("unknown key; expected one of: {}", KEYS.join(", ")),
                ))
            }
        }
        Ok(())
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_sequence_start() -> String {
    "1".to_string()
}

fn default_protected_shape_key() -> String {
    "Basis".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If renamer.json is missing or invalid, returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full renamer.json config, falling back to defaults on any error.
pub fn load_config() -> RenamerConfig {
    let Ok(path) = paths::renamer_json() else {
        return RenamerConfig::default();
    };
    if !path.exists() {
        return RenamerConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            crate::log_status!("config", "Ignoring {}: {}", path.display(), err.summary());
            RenamerConfig::default()
        }
    }
}

/// Strict load from an explicit path.
pub fn load_config_from(path: &Path) -> Result<RenamerConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Save config to renamer.json (creates if missing).
pub fn save_config(config: &RenamerConfig) -> Result<()> {
    save_config_to(&paths::renamer_json()?, config)
}

pub fn save_config_to(path: &Path, config: &RenamerConfig) -> Result<()> {
    io::ensure_parent_dir(path)?;

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize renamer.json".to_string())))?;

    io::write_file_atomic(path, &content, &format!("write {}", path.display()))
}

/// Overwrite renamer.json with built-in defaults.
pub fn reset_config() -> Result<RenamerConfig> {
    let config = RenamerConfig::default();
    save_config(&config)?;
    Ok(config)
}

/// Location of renamer.json, whether or not it exists.
pub fn config_path() -> Result<PathBuf> {
    paths::renamer_json()
}

/// Check if renamer.json file exists
pub fn config_exists() -> bool {
    paths::renamer_json().map(|p| p.exists()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_missing_defaults() {
        let config: RenamerConfig =
            serde_json::from_str(r#"{ "defaults": { "kind": "bone" } }"#).unwrap();
        assert_eq!(config.defaults.kind, EntityKind::Bone);
        assert_eq!(config.defaults.sequence_start, "1");
        assert_eq!(config.defaults.collision, CollisionPolicy::Suffix);
        assert_eq!(config.defaults.protected_shape_key, "Basis");
    }

    #[test]
    fn set_validates_each_key() {
        let mut config = RenamerConfig::default();
        config.set("kind", "vertex-groups").unwrap();
        config.set("collision", "ERROR").unwrap();
        config.set("sequence_start", " 01 ").unwrap();
        assert_eq!(config.defaults.kind, EntityKind::VertexGroup);
        assert_eq!(config.defaults.collision, CollisionPolicy::Error);
        assert_eq!(config.defaults.sequence_start, "01");

        let err = config.set("collision", "rename").unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
        assert!(config.set("protected_shape_key", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn scene_settings_follow_defaults() {
        let mut config = RenamerConfig::default();
        config.set("protected_shape_key", "Rest").unwrap();
        let settings = config.defaults.scene_settings();
        assert_eq!(settings.protected_shape_key, "Rest");
        assert_eq!(settings.collision, CollisionPolicy::Suffix);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("renamer.json");
        let mut config = RenamerConfig::default();
        config.set("kind", "action").unwrap();

        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn invalid_file_reports_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("renamer.json");
        std::fs::write(&path, "{ nope").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
    }
}
