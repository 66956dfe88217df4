use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing::{info, warn};

use tasktable::config::load_config;
use tasktable::task::TaskCommand;
use tasktable::tui::Terminal;
use tasktable::{logging, App, ColorScheme, LaunchOptions, TaskConfig};

/// Taskwarrior reports in a terminal table, colored by your taskrc rules
#[derive(Debug, Parser)]
#[command(name = "tasktable", version, about)]
struct Cli {
    /// Report to show (defaults to `default_report` from config, else `next`)
    report: Option<String>,

    /// Read Taskwarrior settings from this file instead of `task _show`
    #[arg(long, value_name = "FILE", global = true)]
    taskrc: Option<PathBuf>,

    /// Let sub-projects inherit their parent project's color
    #[arg(long, global = true)]
    include_subprojects: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the loaded color rules and precedence, then exit
    Rules,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = logging::init();

    let cli = Cli::parse();
    let config = load_config()?;
    info!(log = ?log_path, "starting tasktable");

    let include_subprojects = cli.include_subprojects || config.include_subprojects();

    let mut command = TaskCommand::new(config.task_command());
    if let Some(taskrc) = &cli.taskrc {
        command = command.with_taskrc(taskrc);
    }

    if let Some(Commands::Rules) = cli.command {
        return print_rules(&command, cli.taskrc.as_deref(), include_subprojects).await;
    }

    let options = LaunchOptions {
        report: cli
            .report
            .unwrap_or_else(|| config.default_report().to_string()),
        taskrc: cli.taskrc,
        include_subprojects,
    };

    let mut app = App::new(config, options).await?;
    let terminal = Terminal::new()?;
    app.run(terminal).await?;

    Ok(())
}

async fn print_rules(
    command: &TaskCommand,
    taskrc: Option<&std::path::Path>,
    include_subprojects: bool,
) -> Result<()> {
    let task_config = match taskrc {
        Some(path) => TaskConfig::from_file(path)?,
        None => TaskConfig::load(command).await?,
    };

    let projects = if include_subprojects {
        command.projects().await.unwrap_or_else(|e| {
            warn!(error = %e, "could not list projects");
            Vec::new()
        })
    } else {
        Vec::new()
    };

    let scheme = ColorScheme::build(&task_config, &projects, include_subprojects);
    for line in scheme.describe() {
        println!("{line}");
    }

    Ok(())
}
