//! Snapshot of Taskwarrior's own configuration.
//!
//! Taskwarrior settings are flat `key=value` pairs. They are read either
//! from `task _show` (which already has includes and defaults applied) or
//! straight from a taskrc file.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::task::TaskCommand;

/// Global color switch
pub const COLOR_KEY: &str = "color";

/// Comma-separated color precedence list
pub const COLOR_PRECEDENCE_KEY: &str = "rule.precedence.color";

/// Immutable key/value view of the Taskwarrior configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskConfig {
    entries: BTreeMap<String, String>,
}

impl TaskConfig {
    /// Parse `key=value` lines. Comments, blank lines, `include`
    /// directives and lines without `=` are skipped.
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in text.lines() {
            let line = strip_comment(line).trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with("include ") {
                debug!(line, "skipping taskrc include");
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                debug!(line, "skipping taskrc line without '='");
                continue;
            };

            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), value.trim().to_string());
        }

        Self { entries }
    }

    /// Build a snapshot from explicit pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Read a taskrc file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content);
        debug!(path = %path.display(), entries = config.len(), "loaded taskrc file");
        Ok(config)
    }

    /// Ask Taskwarrior for its effective configuration
    pub async fn load(command: &TaskCommand) -> Result<Self> {
        let output = command.show().await?;
        let config = Self::parse(&output);
        debug!(entries = config.len(), "loaded configuration from task _show");
        Ok(config)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Taskwarrior boolean; missing or malformed values are false
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).map(parse_bool).unwrap_or(false)
    }

    /// All entries whose key starts with `prefix`, in key order
    pub fn entries_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.entries
            .range(prefix.to_string()..)
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a Taskwarrior boolean (`on`, `yes`, `y`, `true`, `1`)
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "on" | "yes" | "y" | "true" | "1"
    )
}

/// `#` starts a comment only at the start of a line or after whitespace
fn strip_comment(line: &str) -> &str {
    let mut prev: Option<char> = None;
    for (pos, c) in line.char_indices() {
        if c == '#' && prev.map_or(true, char::is_whitespace) {
            return &line[..pos];
        }
        prev = Some(c);
    }
    line
}
