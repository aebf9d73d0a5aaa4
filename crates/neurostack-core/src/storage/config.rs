//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Cycle settings (Boron rotation week or anchor date, Ashwagandha override)
//! - Display preferences for the due list
//! - An optional alternate catalog file
//!
//! Configuration is stored at `~/.config/neurostack/config.toml`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::catalog::Catalog;
use crate::cycle::{CycleSettings, CycleState};
use crate::error::{ConfigError, Result};

/// Due-list display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// List held-back items with their reason.
    #[serde(default)]
    pub show_excluded: bool,
    #[serde(default = "default_true")]
    pub show_optional_tag: bool,
    /// Print phase timing guidance under the due list.
    #[serde(default = "default_true")]
    pub show_guidance: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/neurostack/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cycles: CycleSettings,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Alternate catalog file; the built-in table is used when unset.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

fn default_true() -> bool {
    true
}

/// `path` joined onto `base` unless it is already absolute.
fn catalog_file(path: &str, base: &Path) -> PathBuf {
    base.join(path)
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_excluded: false,
            show_optional_tag: true,
            show_guidance: true,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                // "none" clears an optional; non-optional fields reject the
                // null when the config is deserialized again.
                let new_value = match existing {
                    _ if value.eq_ignore_ascii_case("none") => serde_json::Value::Null,
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value.parse::<u64>().map_err(|e| invalid(e.to_string()))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    // Unset optional: JSON scalars first, anything else as a
                    // string. `set_value` retries a rejected scalar as a string.
                    serde_json::Value::Null => serde_json::from_str::<serde_json::Value>(value)
                        .ok()
                        .filter(|v| v.is_boolean() || v.is_number())
                        .unwrap_or_else(|| serde_json::Value::String(value.into())),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(cfg)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// field's type.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |e: serde_json::Error| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        };
        let original = serde_json::to_value(&*self)?;
        let was_unset = matches!(
            Self::get_json_value_by_path(&original, key),
            Some(serde_json::Value::Null)
        );

        let mut json = original.clone();
        Self::set_json_value_by_path(&mut json, key, value)?;
        let parsed = match serde_json::from_value(json) {
            Ok(cfg) => cfg,
            // e.g. a catalog path named "2026" on an unset optional
            Err(_) if was_unset && !value.eq_ignore_ascii_case("none") => {
                let mut json = original;
                let pointer = format!("/{}", key.replace('.', "/"));
                if let Some(slot) = json.pointer_mut(&pointer) {
                    *slot = serde_json::Value::String(value.to_string());
                }
                serde_json::from_value(json).map_err(invalid)?
            }
            Err(e) => return Err(invalid(e).into()),
        };
        *self = parsed;
        Ok(())
    }

    /// Set a config value by key and save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)?;
        self.save()
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }

    /// Catalog selected by `catalog_path`, or the built-in table.
    ///
    /// A relative `catalog_path` is taken relative to the config directory.
    pub fn catalog(&self) -> Result<Cow<'static, Catalog>> {
        match &self.catalog_path {
            Some(path) => {
                let path = catalog_file(path, &data_dir()?);
                Ok(Cow::Owned(Catalog::load(&path)?))
            }
            None => Ok(Cow::Borrowed(Catalog::reference())),
        }
    }

    /// Cycle switches for `date` under the current settings.
    pub fn cycle_state(&self, date: NaiveDate) -> Result<CycleState> {
        self.cycles.cycle_state(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::BoronWeek;
    use crate::error::CoreError;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.cycles.boron_week, BoronWeek::Week1);
        assert!(parsed.display.show_optional_tag);
        assert!(parsed.catalog_path.is_none());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("display.show_excluded").as_deref(), Some("false"));
        assert_eq!(cfg.get("cycles.boron_week").as_deref(), Some("week1"));
        assert_eq!(cfg.get("cycles.ashwagandha_override").as_deref(), Some("null"));
        assert!(cfg.get("display.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_value_updates_nested_bool() {
        let mut cfg = Config::default();
        cfg.set_value("display.show_excluded", "true").unwrap();
        assert!(cfg.display.show_excluded);
    }

    #[test]
    fn set_value_updates_enum_string() {
        let mut cfg = Config::default();
        cfg.set_value("cycles.boron_week", "week3").unwrap();
        assert_eq!(cfg.cycles.boron_week, BoronWeek::Week3);
        assert!(cfg.set_value("cycles.boron_week", "week9").is_err());
    }

    #[test]
    fn set_value_fills_and_clears_optionals() {
        let mut cfg = Config::default();
        cfg.set_value("cycles.ashwagandha_override", "false").unwrap();
        assert_eq!(cfg.cycles.ashwagandha_override, Some(false));

        cfg.set_value("cycles.boron_cycle_start", "2026-10-05").unwrap();
        assert_eq!(cfg.cycles.boron_cycle_start, NaiveDate::from_ymd_opt(2026, 10, 5));

        cfg.set_value("cycles.ashwagandha_override", "none").unwrap();
        assert_eq!(cfg.cycles.ashwagandha_override, None);

        cfg.set_value("cycles.boron_cycle_start", "NONE").unwrap();
        assert_eq!(cfg.cycles.boron_cycle_start, None);
    }

    #[test]
    fn set_value_clears_override_after_true() {
        let mut cfg = Config::default();
        cfg.set_value("cycles.ashwagandha_override", "true").unwrap();
        cfg.set_value("display.show_excluded", "true").unwrap();

        cfg.set_value("cycles.ashwagandha_override", "none").unwrap();
        assert_eq!(cfg.cycles.ashwagandha_override, None);
        assert!(cfg.display.show_excluded);
    }

    #[test]
    fn none_is_rejected_for_required_fields() {
        let mut cfg = Config::default();
        let err = cfg.set_value("display.show_guidance", "none").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::InvalidValue { .. })));
        assert!(cfg.display.show_guidance);
    }

    #[test]
    fn numeric_catalog_path_stays_a_string() {
        let mut cfg = Config::default();
        cfg.set_value("catalog_path", "2026").unwrap();
        assert_eq!(cfg.catalog_path.as_deref(), Some("2026"));

        let mut cfg = Config::default();
        cfg.set_value("cycles.ashwagandha_override", "true").unwrap();
        assert_eq!(cfg.cycles.ashwagandha_override, Some(true));
    }

    #[test]
    fn relative_catalog_path_uses_config_dir() {
        let base = Path::new("/home/user/.config/neurostack");
        assert_eq!(
            catalog_file("protocols/custom.toml", base),
            base.join("protocols/custom.toml")
        );
        assert_eq!(
            catalog_file("/etc/neurostack/catalog.toml", base),
            PathBuf::from("/etc/neurostack/catalog.toml")
        );
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "display.nonexistent_key", "value");
        assert!(matches!(result, Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_json_value_by_path_rejects_invalid_type() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result =
            Config::set_json_value_by_path(&mut json, "display.show_excluded", "not_a_bool");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.cycles.boron_week = BoronWeek::Week2;
        cfg.cycles.ashwagandha_override = Some(true);
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn load_from_reports_parse_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "cycles = 3").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn catalog_defaults_to_reference() {
        let cfg = Config::default();
        assert!(matches!(cfg.catalog().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn catalog_path_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, Catalog::reference().to_toml_string().unwrap()).unwrap();
        let cfg = Config {
            catalog_path: Some(path.display().to_string()),
            ..Config::default()
        };
        assert_eq!(cfg.catalog().unwrap().as_ref(), Catalog::reference());
    }
}
