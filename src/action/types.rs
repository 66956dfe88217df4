/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveTop,
    MoveBottom,
    PageUp,
    PageDown,

    // Task operations
    ShowInfo,
    EditTask,
    Refresh,

    // Mode switching
    EnterSearchMode,
    EnterNormalMode,
    Confirm,
    Cancel,

    // Search input
    InsertChar(char),
    DeleteChar,
    DeleteWord,

    // Other
    ToggleHelp,
    Quit,
    ForceQuit,

    // Shell command from a user binding
    RunCommand(String),
}

impl Action {
    /// Parse action from its config name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MoveUp" => Some(Action::MoveUp),
            "MoveDown" => Some(Action::MoveDown),
            "MoveTop" => Some(Action::MoveTop),
            "MoveBottom" => Some(Action::MoveBottom),
            "PageUp" => Some(Action::PageUp),
            "PageDown" => Some(Action::PageDown),
            "ShowInfo" => Some(Action::ShowInfo),
            "EditTask" => Some(Action::EditTask),
            "Refresh" => Some(Action::Refresh),
            "EnterSearchMode" => Some(Action::EnterSearchMode),
            "EnterNormalMode" => Some(Action::EnterNormalMode),
            "Confirm" => Some(Action::Confirm),
            "Cancel" => Some(Action::Cancel),
            "DeleteChar" => Some(Action::DeleteChar),
            "DeleteWord" => Some(Action::DeleteWord),
            "ToggleHelp" => Some(Action::ToggleHelp),
            "Quit" => Some(Action::Quit),
            "ForceQuit" => Some(Action::ForceQuit),
            // "None" disables a default binding
            _ => None,
        }
    }

    /// Substitute the selected task's UUID into a command template
    pub fn expand_command(template: &str, uuid: &str) -> String {
        template.replace("$TASK_UUID", uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===================
    // Navigation actions
    // ===================

    #[test]
    fn test_action_from_str_navigation() {
        assert_eq!(Action::from_str("MoveUp"), Some(Action::MoveUp));
        assert_eq!(Action::from_str("MoveDown"), Some(Action::MoveDown));
        assert_eq!(Action::from_str("MoveTop"), Some(Action::MoveTop));
        assert_eq!(Action::from_str("MoveBottom"), Some(Action::MoveBottom));
        assert_eq!(Action::from_str("PageUp"), Some(Action::PageUp));
        assert_eq!(Action::from_str("PageDown"), Some(Action::PageDown));
    }

    // ===================
    // Task operations
    // ===================

    #[test]
    fn test_action_from_str_task_operations() {
        assert_eq!(Action::from_str("ShowInfo"), Some(Action::ShowInfo));
        assert_eq!(Action::from_str("EditTask"), Some(Action::EditTask));
        assert_eq!(Action::from_str("Refresh"), Some(Action::Refresh));
    }

    // ===================
    // Special cases
    // ===================

    #[test]
    fn test_action_from_str_unknown() {
        assert_eq!(Action::from_str("None"), None);
        assert_eq!(Action::from_str("editTask"), None);
        assert_eq!(Action::from_str(""), None);
    }

    #[test]
    fn test_expand_command() {
        assert_eq!(
            Action::expand_command("task $TASK_UUID done", "abc-123"),
            "task abc-123 done"
        );
        assert_eq!(Action::expand_command("task sync", "abc-123"), "task sync");
    }
}
