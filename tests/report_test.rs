//! Reports built from `task export` output

mod common;

use common::BASE_TASKRC;
use tasktable::report::{Report, TaskTable};
use tasktable::task::parse_export;
use tasktable::{ColorScheme, Error, TaskConfig};

const EXPORT: &str = r#"[
  {"id": 1, "uuid": "0f3b2a9c-1111-4c1e-9a36-6f6d1a2b3c4d", "description": "Pay rent",
   "project": "Home", "status": "pending", "urgency": 9.1,
   "due": "20240131T120000Z", "entry": "20240101T090000Z"},
  {"id": 2, "uuid": "7d4e5f60-2222-4b2a-8c3d-1e2f3a4b5c6d", "description": "Review PR",
   "project": "Work.Code", "tags": ["next", "review"], "status": "pending",
   "urgency": 12.0, "priority": "H", "depends": "0f3b2a9c-1111-4c1e-9a36-6f6d1a2b3c4d"}
]"#;

fn config(extra: &str) -> TaskConfig {
    TaskConfig::parse(&format!("{BASE_TASKRC}{extra}"))
}

// ===================
// Report definitions
// ===================

#[test]
fn test_report_from_taskrc() {
    let report = Report::from_config(&config(""), "next").unwrap();

    assert_eq!(report.columns, vec!["id", "project", "tags", "description"]);
    assert_eq!(report.labels, vec!["ID", "Project", "Tags", "Description"]);
    assert_eq!(report.filter, "status:pending");
}

#[test]
fn test_unknown_report_is_an_error() {
    let err = Report::from_config(&config(""), "burndown.weekly").unwrap_err();
    assert!(matches!(err, Error::UnknownReport(ref name) if name == "burndown.weekly"));
    assert_eq!(err.to_string(), "Unknown report: burndown.weekly");
}

// ===================
// Table building
// ===================

#[test]
fn test_table_from_export() {
    let tasks = parse_export(EXPORT).unwrap();
    let report = Report::from_config(&config(""), "next").unwrap();
    let table = TaskTable::build(&report, &tasks, &ColorScheme::default());

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1].cells, vec!["2", "Work.Code", "next review", "Review PR"]);
    assert_eq!(table.widths, vec![2, 9, 11, 11]);
}

#[test]
fn test_table_rows_use_scheme() {
    let config = config("color.project.Work=yellow\ncolor.uda.priority.H=on red\n");
    let tasks = parse_export(EXPORT).unwrap();
    let projects = vec!["Home".to_string(), "Work".to_string(), "Work.Code".to_string()];
    let scheme = ColorScheme::build(&config, &projects, true);
    let report = Report::from_config(&config, "next").unwrap();

    let table = TaskTable::build(&report, &tasks, &scheme);

    assert!(table.rows[0].attr.is_none());
    // project. precedes uda. in the precedence list
    let attr = table.rows[1].attr.as_ref().unwrap();
    assert_eq!(attr.foreground, "yellow");
    assert_eq!(attr.background, "");
}

#[test]
fn test_export_fields() {
    let tasks = parse_export(EXPORT).unwrap();

    assert_eq!(tasks[0].column_value("urgency"), "9.1");
    assert!(tasks[0].due.is_some());
    assert_eq!(tasks[1].depends, vec!["0f3b2a9c-1111-4c1e-9a36-6f6d1a2b3c4d"]);
    assert_eq!(tasks[1].column_value("priority"), "H");
    assert_eq!(tasks[1].short_uuid(), "7d4e5f60");
}
