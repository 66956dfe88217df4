use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::config::{default_bindings, parse_key, parse_modifiers, Config, KeyBinding};

use super::Action;

/// Maps key events to actions; user bindings shadow the defaults
pub struct ActionDispatcher {
    bindings: Vec<KeyBinding>,
}

impl ActionDispatcher {
    pub fn new(config: &Config) -> Self {
        let mut bindings = config.bindings.clone();
        bindings.extend(default_bindings());
        Self { bindings }
    }

    pub fn dispatch(&self, key: KeyEvent, mode: &Mode) -> Option<Action> {
        if let Some(binding) = self.bindings.iter().find(|b| matches(b, &key, mode)) {
            return to_action(binding);
        }

        if *mode == Mode::Search {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                if let KeyCode::Char(c) = key.code {
                    return Some(Action::InsertChar(c));
                }
            }
            if key.code == KeyCode::Backspace {
                return Some(Action::DeleteChar);
            }
        }

        None
    }
}

fn matches(binding: &KeyBinding, key: &KeyEvent, mode: &Mode) -> bool {
    let Ok(binding_key) = parse_key(&binding.key) else {
        return false;
    };

    binding_key == key.code
        && parse_modifiers(binding.mods.as_deref()) == key.modifiers
        && binding
            .mode
            .as_deref()
            .is_none_or(|restriction| mode_matches(restriction, mode))
}

/// `Normal`, `~Search`, `Normal|Search`
fn mode_matches(restriction: &str, mode: &Mode) -> bool {
    let restriction = restriction.trim();

    if let Some(negated) = restriction.strip_prefix('~') {
        return !mode_matches(negated, mode);
    }

    restriction
        .split('|')
        .any(|name| match name.trim().to_lowercase().as_str() {
            "normal" => *mode == Mode::Normal,
            "search" => *mode == Mode::Search,
            _ => false,
        })
}

fn to_action(binding: &KeyBinding) -> Option<Action> {
    if let Some(action) = &binding.action {
        return Action::from_str(action);
    }
    binding
        .command
        .as_ref()
        .map(|command| Action::RunCommand(command.clone()))
}
