use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use tachyonfx::Interpolation;
use tracing::{info, warn};

use crate::action::{ActionDispatcher, ActionHandler};
use crate::color::ColorScheme;
use crate::config::{default_bindings, Config};
use crate::error::Result;
use crate::report::{Report, TaskRow, TaskTable};
use crate::task::{Task, TaskCommand};
use crate::taskrc::TaskConfig;
use crate::tui::{render, Event, EventHandler, Terminal};

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Search,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Search => write!(f, "Search"),
        }
    }
}

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Notification duration
const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Slide-out animation duration
const SLIDE_OUT_DURATION_MS: u128 = 300;

/// Notification with slide-out animation
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + NOTIFICATION_DURATION,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Horizontal offset during the final slide-out; 0 while fully shown
    pub fn slide_offset(&self, popup_width: u16) -> u16 {
        let now = Instant::now();
        if now >= self.expires_at {
            return popup_width;
        }
        let remaining_ms = self.expires_at.duration_since(now).as_millis();
        if remaining_ms >= SLIDE_OUT_DURATION_MS {
            return 0;
        }

        let progress = 1.0 - (remaining_ms as f32 / SLIDE_OUT_DURATION_MS as f32);
        let eased = Interpolation::QuadOut.alpha(progress);

        (popup_width as f32 * eased) as u16
    }
}

/// Where the data shown on screen comes from
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub report: String,
    /// Read Taskwarrior settings from this file instead of `task _show`
    pub taskrc: Option<PathBuf>,
    pub include_subprojects: bool,
}

/// Everything one load of Taskwarrior produces
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub task_config: TaskConfig,
    pub report: Report,
    pub tasks: Vec<Task>,
    pub scheme: Arc<ColorScheme>,
}

impl Snapshot {
    /// Assemble from already loaded data. `projects` is merged with the
    /// projects of `tasks` before hierarchy expansion.
    pub fn assemble(
        task_config: TaskConfig,
        report_name: &str,
        tasks: Vec<Task>,
        projects: Vec<String>,
        include_subprojects: bool,
    ) -> Result<Self> {
        let report = Report::from_config(&task_config, report_name)?;

        let known: BTreeSet<String> = projects
            .into_iter()
            .chain(tasks.iter().filter_map(|task| task.project.clone()))
            .collect();
        let known: Vec<String> = known.into_iter().collect();

        let scheme = ColorScheme::build(&task_config, &known, include_subprojects);

        Ok(Self {
            task_config,
            report,
            tasks,
            scheme: Arc::new(scheme),
        })
    }

    /// Query Taskwarrior for settings, projects and the report's tasks
    pub async fn load(
        command: &TaskCommand,
        taskrc: Option<&Path>,
        report_name: &str,
        include_subprojects: bool,
    ) -> Result<Self> {
        let task_config = match taskrc {
            Some(path) => TaskConfig::from_file(path)?,
            None => TaskConfig::load(command).await?,
        };

        let report = Report::from_config(&task_config, report_name)?;
        let tasks = command.export(&report.filter).await?;

        let projects = match command.projects().await {
            Ok(projects) => projects,
            Err(e) => {
                warn!(error = %e, "could not list projects, using task projects only");
                Vec::new()
            }
        };

        info!(report = report_name, tasks = tasks.len(), "loaded tasks");
        Self::assemble(task_config, report_name, tasks, projects, include_subprojects)
    }
}

/// Main application state
pub struct App {
    pub config: Config,
    pub mode: Mode,

    // Report table
    pub report: Report,
    pub table: TaskTable,
    /// Row indices that pass the search filter
    pub visible: Vec<usize>,
    pub table_state: TableState,

    // Input state
    pub search_query: String,

    // Notifications (stacked, newest at end)
    pub notifications: Vec<Notification>,

    pub show_help: bool,
    pub should_quit: bool,

    task_config: TaskConfig,
    scheme: Arc<ColorScheme>,
    command: TaskCommand,
    options: LaunchOptions,
    action_dispatcher: ActionDispatcher,
}

impl App {
    /// Load Taskwarrior data and build the initial screen
    pub async fn new(config: Config, options: LaunchOptions) -> Result<Self> {
        let command = task_command(&config, &options);
        let snapshot = Snapshot::load(
            &command,
            options.taskrc.as_deref(),
            &options.report,
            options.include_subprojects,
        )
        .await?;
        Ok(Self::with_snapshot(config, options, snapshot))
    }

    /// Build the application from data that is already loaded
    pub fn with_snapshot(config: Config, options: LaunchOptions, snapshot: Snapshot) -> Self {
        let command = task_command(&config, &options);
        let action_dispatcher = ActionDispatcher::new(&config);
        let table = TaskTable::build(&snapshot.report, &snapshot.tasks, &snapshot.scheme);
        let visible: Vec<usize> = (0..table.rows.len()).collect();

        let mut table_state = TableState::default();
        if !visible.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            config,
            mode: Mode::Normal,
            report: snapshot.report,
            table,
            visible,
            table_state,
            search_query: String::new(),
            notifications: Vec::new(),
            show_help: false,
            should_quit: false,
            task_config: snapshot.task_config,
            scheme: snapshot.scheme,
            command,
            options,
            action_dispatcher,
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self, mut terminal: Terminal) -> Result<()> {
        let event_handler = EventHandler::default();

        while !self.should_quit {
            terminal.draw(|frame| render(frame, self))?;

            if let Some(event) = event_handler.poll()? {
                self.handle_event(event, &mut terminal).await?;
            }

            self.notifications.retain(|n| !n.is_expired());
        }

        Ok(())
    }

    async fn handle_event(&mut self, event: Event, terminal: &mut Terminal) -> Result<()> {
        if let Event::Key(key) = event {
            if let Some(action) = self.action_dispatcher.dispatch(key, &self.mode) {
                ActionHandler::handle(self, action, terminal).await?;
            }
        }
        Ok(())
    }

    /// Reload settings, colors and tasks from Taskwarrior
    pub async fn refresh(&mut self) -> Result<()> {
        let snapshot = Snapshot::load(
            &self.command,
            self.options.taskrc.as_deref(),
            &self.report.name,
            self.options.include_subprojects,
        )
        .await?;
        self.apply_snapshot(snapshot);
        Ok(())
    }

    /// Swap in freshly loaded data, keeping the selected task when it survives
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        let selected_uuid = self.selected_row().map(|row| row.uuid.clone());

        self.table = TaskTable::build(&snapshot.report, &snapshot.tasks, &snapshot.scheme);
        self.report = snapshot.report;
        self.task_config = snapshot.task_config;
        self.scheme = snapshot.scheme;

        self.apply_search();

        if let Some(uuid) = selected_uuid {
            if let Some(pos) = self
                .visible
                .iter()
                .position(|&idx| self.table.rows[idx].uuid == uuid)
            {
                self.table_state.select(Some(pos));
            }
        }
    }

    /// Recompute visible rows from the search query
    pub fn apply_search(&mut self) {
        self.visible = self.table.matching(&self.search_query);
        let selection = if self.visible.is_empty() {
            None
        } else {
            Some(
                self.table_state
                    .selected()
                    .unwrap_or(0)
                    .min(self.visible.len() - 1),
            )
        };
        self.table_state.select(selection);
    }

    /// Drop the last word of the search query along with trailing whitespace
    pub fn delete_search_word(&mut self) {
        let trimmed = self.search_query.trim_end();
        let keep = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(pos, c)| pos + c.len_utf8())
            .unwrap_or(0);
        self.search_query.truncate(keep);
        self.apply_search();
    }

    pub fn scheme(&self) -> Arc<ColorScheme> {
        Arc::clone(&self.scheme)
    }

    pub fn task_config(&self) -> &TaskConfig {
        &self.task_config
    }

    pub fn command(&self) -> &TaskCommand {
        &self.command
    }

    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.table_state
            .selected()
            .and_then(|pos| self.visible.get(pos))
            .and_then(|&idx| self.table.rows.get(idx))
    }

    /// (key, mode, target) rows for the help popup, user bindings first
    pub fn key_hints(&self) -> Vec<(String, String, String)> {
        self.config
            .bindings
            .iter()
            .cloned()
            .chain(default_bindings())
            .map(|binding| {
                let key = match &binding.mods {
                    Some(mods) => format!("{mods}+{}", binding.key),
                    None => binding.key.clone(),
                };
                let mode = binding.mode.unwrap_or_else(|| "any".to_string());
                let target = binding
                    .action
                    .or_else(|| binding.command.map(|command| format!("$ {command}")))
                    .unwrap_or_default();
                (key, mode, target)
            })
            .collect()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::error(message));
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn move_up(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = if current == 0 { len - 1 } else { current - 1 };
        self.table_state.select(Some(next));
    }

    pub fn move_down(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((current + 1) % len));
    }

    pub fn move_top(&mut self) {
        if !self.visible.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn move_bottom(&mut self) {
        if let Some(last) = self.visible.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }

    pub fn page_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(current.saturating_sub(PAGE_SIZE)));
    }

    pub fn page_down(&mut self) {
        let Some(last) = self.visible.len().checked_sub(1) else {
            return;
        };
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((current + PAGE_SIZE).min(last)));
    }
}

fn task_command(config: &Config, options: &LaunchOptions) -> TaskCommand {
    let command = TaskCommand::new(config.task_command());
    match &options.taskrc {
        Some(taskrc) => command.with_taskrc(taskrc),
        None => command,
    }
}
