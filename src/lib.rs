pub mod action;
pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod task;
pub mod taskrc;
pub mod tui;

pub use app::{App, LaunchOptions, Snapshot};
pub use color::ColorScheme;
pub use config::Config;
pub use error::{Error, Result};
pub use taskrc::TaskConfig;
