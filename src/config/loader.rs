use serde::{Deserialize, Deserializer};
use std::path::Path;
use thiserror::Error;

use super::types::KeyBinding;
use crate::report::DEFAULT_REPORT;
use crate::task::DEFAULT_TASK_PROGRAM;
use crate::taskrc::parse_bool;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorConfig {
    /// Let sub-projects inherit their parent project's color
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub include_subprojects: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Taskwarrior binary, defaults to `task`
    pub task_command: Option<String>,
    /// Report shown when none is given on the command line
    pub default_report: Option<String>,
    #[serde(default)]
    pub color: ColorConfig,
    /// User bindings, checked before the built-in ones
    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

impl Config {
    /// Merge two configs, with `other` taking precedence
    pub fn merge(self, other: Config) -> Config {
        let mut bindings = other.bindings;
        bindings.extend(self.bindings);

        Config {
            task_command: other.task_command.or(self.task_command),
            default_report: other.default_report.or(self.default_report),
            color: ColorConfig {
                include_subprojects: other
                    .color
                    .include_subprojects
                    .or(self.color.include_subprojects),
            },
            bindings,
        }
    }

    pub fn task_command(&self) -> &str {
        self.task_command.as_deref().unwrap_or(DEFAULT_TASK_PROGRAM)
    }

    pub fn default_report(&self) -> &str {
        self.default_report.as_deref().unwrap_or(DEFAULT_REPORT)
    }

    pub fn include_subprojects(&self) -> bool {
        self.color.include_subprojects.unwrap_or(false)
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Accept `true`, `"on"`, `"yes"`, `1` and friends; anything else is off
fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<toml::Value> = Option::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        toml::Value::Boolean(b) => b,
        toml::Value::String(s) => parse_bool(&s),
        toml::Value::Integer(i) => i == 1,
        _ => false,
    }))
}

/// Load global config from ~/.config/tasktable/config.toml
fn load_global_config() -> Result<Option<Config>, ConfigError> {
    let config_dir = dirs::config_dir().map(|p| p.join("tasktable").join("config.toml"));

    if let Some(path) = config_dir {
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            return Ok(Some(Config::from_toml(&content)?));
        }
    }

    Ok(None)
}

/// Load local config from .tasktable/config.toml in the current directory or parent directories
fn load_local_config(start_path: &Path) -> Result<Option<Config>, ConfigError> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(".tasktable").join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            return Ok(Some(Config::from_toml(&content)?));
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load and merge configs (global + local)
pub fn load_config() -> Result<Config, ConfigError> {
    let current_dir = std::env::current_dir()?;

    let global = load_global_config()?.unwrap_or_default();
    let local = load_local_config(&current_dir)?.unwrap_or_default();

    Ok(global.merge(local))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.task_command(), "task");
        assert_eq!(config.default_report(), "next");
        assert!(!config.include_subprojects());
        assert!(config.bindings.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(
            r#"
            task_command = "/usr/local/bin/task"
            default_report = "list"

            [color]
            include_subprojects = true

            [[bindings]]
            key = "x"
            action = "EditTask"
            "#,
        )
        .unwrap();

        assert_eq!(config.task_command(), "/usr/local/bin/task");
        assert_eq!(config.default_report(), "list");
        assert!(config.include_subprojects());
        assert_eq!(config.bindings.len(), 1);
        assert_eq!(config.bindings[0].action.as_deref(), Some("EditTask"));
    }

    #[test]
    fn test_include_subprojects_is_lenient() {
        let on = Config::from_toml("[color]\ninclude_subprojects = \"on\"").unwrap();
        assert!(on.include_subprojects());

        let garbage = Config::from_toml("[color]\ninclude_subprojects = \"sometimes\"").unwrap();
        assert!(!garbage.include_subprojects());

        let table = Config::from_toml("[color.include_subprojects]\nx = 1").unwrap();
        assert!(!table.include_subprojects());
    }

    #[test]
    fn test_merge_prefers_other() {
        let global = Config::from_toml(
            "default_report = \"next\"\n[color]\ninclude_subprojects = true\n[[bindings]]\nkey = \"a\"\naction = \"Quit\"",
        )
        .unwrap();
        let local = Config::from_toml(
            "default_report = \"list\"\n[[bindings]]\nkey = \"b\"\naction = \"Refresh\"",
        )
        .unwrap();

        let merged = global.merge(local);
        assert_eq!(merged.default_report(), "list");
        assert!(merged.include_subprojects());
        let keys: Vec<&str> = merged.bindings.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_load_local_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir_all(dir.path().join(".tasktable")).unwrap();
        std::fs::write(
            dir.path().join(".tasktable").join("config.toml"),
            "default_report = \"waiting\"",
        )
        .unwrap();

        let config = load_local_config(&nested).unwrap().unwrap();
        assert_eq!(config.default_report(), "waiting");
    }
}
