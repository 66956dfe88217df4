//! Taskwarrior reports and the rendered table built from them.

use unicode_width::UnicodeWidthStr;

use crate::color::{ColorScheme, DisplayAttr};
use crate::error::{Error, Result};
use crate::task::Task;
use crate::taskrc::TaskConfig;

/// Report used when neither the command line nor the config names one
pub const DEFAULT_REPORT: &str = "next";

/// Column and filter definition of one `report.<name>` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub columns: Vec<String>,
    pub labels: Vec<String>,
    pub filter: String,
}

impl Report {
    pub fn from_config(config: &TaskConfig, name: &str) -> Result<Self> {
        let columns = config
            .get(&format!("report.{name}.columns"))
            .map(split_list)
            .filter(|columns| !columns.is_empty())
            .ok_or_else(|| Error::UnknownReport(name.to_string()))?;

        let mut labels = config
            .get(&format!("report.{name}.labels"))
            .map(split_list)
            .unwrap_or_default();
        labels.resize(columns.len(), String::new());
        for (label, column) in labels.iter_mut().zip(&columns) {
            if label.is_empty() {
                *label = column.split('.').next().unwrap_or(column).to_string();
            }
        }

        let filter = config
            .get(&format!("report.{name}.filter"))
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            name: name.to_string(),
            columns,
            labels,
            filter,
        })
    }

    /// Names of every report defined in the configuration
    pub fn names(config: &TaskConfig) -> Vec<String> {
        config
            .entries_with_prefix("report.")
            .filter_map(|(key, _)| {
                key.strip_prefix("report.")?
                    .strip_suffix(".columns")
                    .map(str::to_string)
            })
            .collect()
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One rendered row
#[derive(Debug, Clone)]
pub struct TaskRow {
    pub uuid: String,
    pub description: String,
    pub cells: Vec<String>,
    /// Resolved color, `None` for default styling
    pub attr: Option<DisplayAttr>,
}

/// Report rows plus the column widths needed to show them
#[derive(Debug, Clone, Default)]
pub struct TaskTable {
    pub headers: Vec<String>,
    pub rows: Vec<TaskRow>,
    pub widths: Vec<u16>,
}

impl TaskTable {
    pub fn build(report: &Report, tasks: &[Task], scheme: &ColorScheme) -> Self {
        let rows: Vec<TaskRow> = tasks
            .iter()
            .map(|task| TaskRow {
                uuid: task.uuid.clone(),
                description: task.description.clone(),
                cells: report
                    .columns
                    .iter()
                    .map(|column| task.column_value(column))
                    .collect(),
                attr: scheme.resolve(task),
            })
            .collect();

        let widths = report
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                rows.iter()
                    .filter_map(|row| row.cells.get(i))
                    .map(|cell| cell.width())
                    .chain(std::iter::once(label.width()))
                    .max()
                    .unwrap_or(0)
                    .min(u16::MAX as usize) as u16
            })
            .collect();

        Self {
            headers: report.labels.clone(),
            rows,
            widths,
        }
    }

    /// Indices of rows whose description contains `query`, ignoring case
    pub fn matching(&self, query: &str) -> Vec<usize> {
        let query = query.to_lowercase();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| query.is_empty() || row.description.to_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect()
    }
}
