use serde::{Deserialize, Serialize};

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key to bind (e.g., "j", "Enter", "Esc", "F1")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Shift", "Alt", "Control|Shift")
    #[serde(default)]
    pub mods: Option<String>,

    /// Mode restriction (e.g., "Normal", "Search", "~Normal")
    #[serde(default)]
    pub mode: Option<String>,

    /// Built-in action to execute
    #[serde(default)]
    pub action: Option<String>,

    /// Shell command to execute; `$TASK_UUID` expands to the selected task
    #[serde(default)]
    pub command: Option<String>,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            mode: None,
            action: None,
            command: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

/// Built-in bindings, consulted after the user's own
pub fn default_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding::new("j").with_action("MoveDown").with_mode("Normal"),
        KeyBinding::new("k").with_action("MoveUp").with_mode("Normal"),
        KeyBinding::new("Down").with_action("MoveDown"),
        KeyBinding::new("Up").with_action("MoveUp"),
        KeyBinding::new("n").with_mods("Control").with_action("MoveDown"),
        KeyBinding::new("p").with_mods("Control").with_action("MoveUp"),
        KeyBinding::new("g").with_action("MoveTop").with_mode("Normal"),
        KeyBinding::new("G").with_mods("Shift").with_action("MoveBottom").with_mode("Normal"),
        KeyBinding::new("G").with_action("MoveBottom").with_mode("Normal"),
        KeyBinding::new("PageUp").with_action("PageUp"),
        KeyBinding::new("PageDown").with_action("PageDown"),
        // Task operations
        KeyBinding::new("Enter").with_action("ShowInfo").with_mode("Normal"),
        KeyBinding::new("e").with_action("EditTask").with_mode("Normal"),
        KeyBinding::new("r").with_action("Refresh").with_mode("Normal"),
        // Search
        KeyBinding::new("/").with_action("EnterSearchMode").with_mode("Normal"),
        KeyBinding::new("Enter").with_action("Confirm").with_mode("Search"),
        KeyBinding::new("Esc").with_action("Cancel").with_mode("Search"),
        KeyBinding::new("w").with_mods("Control").with_action("DeleteWord").with_mode("Search"),
        // Other
        KeyBinding::new("?").with_action("ToggleHelp").with_mode("Normal"),
        KeyBinding::new("q").with_action("Quit").with_mode("Normal"),
        KeyBinding::new("Q").with_mods("Shift").with_action("Quit").with_mode("Normal"),
        KeyBinding::new("Esc").with_action("Quit").with_mode("Normal"),
        KeyBinding::new("c").with_mods("Control").with_action("ForceQuit"),
    ]
}
