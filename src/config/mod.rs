mod keybinding;
mod loader;
mod types;

pub use keybinding::{parse_key, parse_modifiers};
pub use loader::{load_config, ColorConfig, Config, ConfigError};
pub use types::{default_bindings, KeyBinding};
