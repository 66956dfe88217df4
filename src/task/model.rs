use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::color::TaskAttributes;

/// Timestamp layout used by `task export`
const TASK_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Date layout used when rendering dates in the table
const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// One task as emitted by `task export`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Task {
    /// Working-set id; 0 for completed and deleted tasks
    #[serde(default)]
    pub id: u64,
    pub uuid: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub due: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub scheduled: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recur: Option<String>,
    #[serde(default, deserialize_with = "deserialize_depends")]
    pub depends: Vec<String>,
    #[serde(default)]
    pub urgency: f64,
    /// Every other attribute, including user-defined ones
    #[serde(flatten)]
    pub udas: BTreeMap<String, serde_json::Value>,
}

impl Task {
    /// Text shown in a report column. A format suffix such as
    /// `due.relative` is ignored.
    pub fn column_value(&self, column: &str) -> String {
        let name = column.split('.').next().unwrap_or(column);

        match name {
            "id" => {
                if self.id == 0 {
                    String::new()
                } else {
                    self.id.to_string()
                }
            }
            "uuid" => self.uuid.clone(),
            "description" => self.description.clone(),
            "project" => self.project.clone().unwrap_or_default(),
            "tags" => self.tags.join(" "),
            "status" => self.status.clone(),
            "due" => format_date(self.due),
            "scheduled" => format_date(self.scheduled),
            "start" => format_date(self.start),
            "recur" => self.recur.clone().unwrap_or_default(),
            "depends" => self.depends.join(","),
            "urgency" => format!("{:.1}", self.urgency),
            other => self.udas.get(other).map(json_to_text).unwrap_or_default(),
        }
    }

    /// Short uuid prefix, as Taskwarrior prints it
    pub fn short_uuid(&self) -> &str {
        self.uuid.get(..8).unwrap_or(&self.uuid)
    }
}

impl TaskAttributes for Task {
    fn attribute(&self, name: &str) -> Option<String> {
        let value = self.column_value(name);
        (!value.is_empty()).then_some(value)
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.with_timezone(&Local).format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn json_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse a Taskwarrior timestamp such as `20240131T120000Z`
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TASK_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
    }
}

/// Taskwarrior 2.x exports `depends` as a comma-joined string, 3.x as a list
#[derive(Deserialize)]
#[serde(untagged)]
enum Depends {
    List(Vec<String>),
    Joined(String),
}

fn deserialize_depends<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let depends: Option<Depends> = Option::deserialize(deserializer)?;
    Ok(match depends {
        None => Vec::new(),
        Some(Depends::List(list)) => list,
        Some(Depends::Joined(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}
