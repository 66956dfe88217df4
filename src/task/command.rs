use std::path::PathBuf;
use std::process::ExitStatus;

use tokio::process::Command;
use tracing::{debug, warn};

use super::Task;
use crate::error::{Error, Result};

/// Default Taskwarrior binary
pub const DEFAULT_TASK_PROGRAM: &str = "task";

/// Thin wrapper around the `task` binary
#[derive(Debug, Clone)]
pub struct TaskCommand {
    program: String,
    taskrc: Option<PathBuf>,
}

impl Default for TaskCommand {
    fn default() -> Self {
        Self::new(DEFAULT_TASK_PROGRAM)
    }
}

impl TaskCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            taskrc: None,
        }
    }

    /// Point every invocation at an alternate taskrc (`rc:<file>`)
    pub fn with_taskrc(mut self, taskrc: impl Into<PathBuf>) -> Self {
        self.taskrc = Some(taskrc.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments placed before every subcommand
    fn base_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(taskrc) = &self.taskrc {
            args.push(format!("rc:{}", taskrc.display()));
        }
        args.push("rc.confirmation=off".to_string());
        args.push("rc.verbose=nothing".to_string());
        args
    }

    /// Full argument list for a non-interactive call
    pub fn args_for(&self, args: &[&str]) -> Vec<String> {
        let mut full = self.base_args();
        full.extend(args.iter().map(|a| a.to_string()));
        full
    }

    async fn output(&self, args: &[&str]) -> Result<String> {
        let args = self.args_for(args);
        let rendered = format!("{} {}", self.program, args.join(" "));
        debug!(command = %rendered, "running task command");

        let output = Command::new(&self.program).args(&args).output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(command = %rendered, %stderr, "task command failed");
            return Err(Error::TaskCommand {
                command: rendered,
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Export the tasks matching a report filter
    pub async fn export(&self, filter: &str) -> Result<Vec<Task>> {
        let mut args: Vec<&str> = filter.split_whitespace().collect();
        args.push("export");

        let output = self.output(&args).await?;
        parse_export(&output)
    }

    /// Effective configuration as `key=value` lines
    pub async fn show(&self) -> Result<String> {
        self.output(&["_show"]).await
    }

    /// Every project name Taskwarrior knows about, one per line
    pub async fn projects(&self) -> Result<Vec<String>> {
        let output = self.output(&["_projects"]).await?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Open the task in the editor; blocks until the editor exits
    pub fn edit(&self, uuid: &str) -> std::io::Result<ExitStatus> {
        self.interactive(&[uuid, "edit"])
    }

    /// Print the task's full record; blocks until `task` exits
    pub fn info(&self, uuid: &str) -> std::io::Result<ExitStatus> {
        self.interactive(&[uuid, "info"])
    }

    fn interactive(&self, args: &[&str]) -> std::io::Result<ExitStatus> {
        let mut full = Vec::new();
        if let Some(taskrc) = &self.taskrc {
            full.push(format!("rc:{}", taskrc.display()));
        }
        full.extend(args.iter().map(|a| a.to_string()));

        debug!(program = %self.program, args = ?full, "running interactive task command");
        std::process::Command::new(&self.program).args(&full).status()
    }
}

/// Parse `task export` output. Empty output means no tasks.
pub fn parse_export(output: &str) -> Result<Vec<Task>> {
    let output = output.trim();
    if output.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(output)?)
}
