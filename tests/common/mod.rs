//! Common test utilities

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tasktable::task::Task;
use tasktable::TaskConfig;
use tempfile::TempDir;

/// A taskrc file in a temporary directory
pub struct TestTaskrc {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestTaskrc {
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("taskrc");
        std::fs::write(&path, content).expect("Failed to write taskrc");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> TaskConfig {
        TaskConfig::from_file(&self.path).expect("Failed to read taskrc")
    }
}

/// Taskwarrior-like configuration with color on and a `next` report
pub const BASE_TASKRC: &str = "\
color=on
rule.precedence.color=deleted,completed,active,keyword.,tag.,project.,overdue,scheduled,due.today,due,blocked,blocking,recurring,tagged,uda.
report.next.columns=id,project,tags,description
report.next.labels=ID,Project,Tags,Description
report.next.filter=status:pending
";

/// Builder for task records
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(uuid: &str, description: &str) -> Self {
        Self {
            task: Task {
                uuid: uuid.to_string(),
                description: description.to_string(),
                status: "pending".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.task.id = id;
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.task.project = Some(project.to_string());
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.task.tags.push(tag.to_string());
        self
    }

    pub fn uda(mut self, name: &str, value: &str) -> Self {
        self.task
            .udas
            .insert(name.to_string(), serde_json::Value::String(value.to_string()));
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}
