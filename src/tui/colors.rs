//! Colors for the application's own chrome.
//!
//! Task rows are colored by the Taskwarrior rules; everything else uses
//! these 256-color constants.

use ratatui::style::Color;

/// Primary accent color (steel blue)
pub const PRIMARY: Color = Color::Indexed(73);

/// Secondary/muted text color
pub const MUTED: Color = Color::Indexed(243);

/// Background for the selected row
pub const SELECTION_BG: Color = Color::Indexed(236);

/// Search text
pub const HIGHLIGHT: Color = Color::Indexed(179);

/// Error notifications
pub const ERROR: Color = Color::Indexed(167);

/// Header/footer background
pub const BAR_BG: Color = Color::Indexed(236);

/// Border of the help popup
pub const BORDER_FOCUS: Color = Color::Indexed(73);
