use std::io::Write;
use std::process::Command;

use tracing::{info, warn};

use crate::app::{App, Mode, Notification};
use crate::error::Result;
use crate::tui::Terminal;

use super::Action;

/// Handles action execution
pub struct ActionHandler;

impl ActionHandler {
    pub async fn handle(app: &mut App, action: Action, terminal: &mut Terminal) -> Result<()> {
        match action {
            // Navigation
            Action::MoveUp => app.move_up(),
            Action::MoveDown => app.move_down(),
            Action::MoveTop => app.move_top(),
            Action::MoveBottom => app.move_bottom(),
            Action::PageUp => app.page_up(),
            Action::PageDown => app.page_down(),

            // Task operations
            Action::ShowInfo => Self::handle_show_info(app, terminal)?,
            Action::EditTask => Self::handle_edit(app, terminal).await?,
            Action::Refresh => {
                if Self::refresh(app).await {
                    app.notify(Notification::info("Refreshed"));
                }
            }

            // Mode switching
            Action::EnterSearchMode => {
                app.mode = Mode::Search;
                app.search_query.clear();
                app.apply_search();
            }
            Action::EnterNormalMode | Action::Confirm => {
                app.mode = Mode::Normal;
            }
            Action::Cancel => {
                app.mode = Mode::Normal;
                app.search_query.clear();
                app.apply_search();
            }

            // Search input
            Action::InsertChar(c) => {
                if app.mode == Mode::Search {
                    app.search_query.push(c);
                    app.apply_search();
                }
            }
            Action::DeleteChar => {
                if app.search_query.pop().is_some() {
                    app.apply_search();
                }
            }
            Action::DeleteWord => app.delete_search_word(),

            // Other
            Action::ToggleHelp => {
                app.show_help = !app.show_help;
            }
            Action::Quit => {
                if app.show_help {
                    app.show_help = false;
                } else {
                    app.should_quit = true;
                }
            }
            Action::ForceQuit => {
                app.should_quit = true;
            }

            Action::RunCommand(template) => Self::run_command(app, terminal, &template).await?,
        }

        Ok(())
    }

    /// Reload everything; failures become an error notification
    async fn refresh(app: &mut App) -> bool {
        match app.refresh().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "refresh failed");
                app.show_error(format!("Refresh failed: {e}"));
                false
            }
        }
    }

    fn handle_show_info(app: &mut App, terminal: &mut Terminal) -> Result<()> {
        let Some(uuid) = app.selected_row().map(|row| row.uuid.clone()) else {
            return Ok(());
        };

        let command = app.command().clone();
        let status = terminal.suspend(|| {
            let status = command.info(&uuid);
            wait_for_enter();
            status
        })?;

        if let Err(e) = status {
            app.show_error(format!("Failed to run {}: {e}", command.program()));
        }
        Ok(())
    }

    async fn handle_edit(app: &mut App, terminal: &mut Terminal) -> Result<()> {
        let Some(uuid) = app.selected_row().map(|row| row.uuid.clone()) else {
            return Ok(());
        };

        let command = app.command().clone();
        let status = terminal.suspend(|| command.edit(&uuid))?;

        match status {
            Ok(s) if s.success() => {
                info!(%uuid, "edited task");
            }
            Ok(s) => app.show_error(format!("task edit exited with {s}")),
            Err(e) => app.show_error(format!("Failed to run {}: {e}", command.program())),
        }

        Self::refresh(app).await;
        Ok(())
    }

    async fn run_command(app: &mut App, terminal: &mut Terminal, template: &str) -> Result<()> {
        let Some(uuid) = app.selected_row().map(|row| row.uuid.clone()) else {
            app.show_error("No task selected");
            return Ok(());
        };

        let cmd = Action::expand_command(template, &uuid);
        info!(command = %cmd, "running bound command");

        terminal.suspend(|| {
            match Command::new("sh").arg("-c").arg(&cmd).status() {
                Ok(s) if s.success() => {
                    println!("\nCommand completed successfully.");
                }
                Ok(s) => {
                    println!("\nCommand exited with status: {s}.");
                }
                Err(e) => {
                    println!("\nFailed to run command: {e}.");
                }
            }
            wait_for_enter();
        })?;

        Self::refresh(app).await;
        Ok(())
    }
}

fn wait_for_enter() {
    print!("Press Enter to continue...");
    let _ = std::io::stdout().flush();
    let mut input = String::new();
    let _ = std::io::stdin().read_line(&mut input);
}
