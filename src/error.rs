use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("`{command}` exited with status {code}: {stderr}")]
    TaskCommand {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Unknown report: {0}")]
    UnknownReport(String),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),
}
