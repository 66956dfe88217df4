//! Conversion of resolved display attributes into ratatui styles.
//!
//! Spec strings are comma-joined tokens. The first token that names a
//! color decides that side's color; modifier tokens add to the style; any
//! other token is ignored.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use super::directive::{ColorModifier, SPEC_SEPARATOR};
use super::rule::DisplayAttr;

/// Build the row style for a resolved attribute
pub fn to_style(attr: &DisplayAttr) -> Style {
    let mut style = Style::default();

    if let Some(fg) = first_color(&attr.foreground) {
        style = style.fg(fg);
    }
    if let Some(bg) = first_color(&attr.background) {
        style = style.bg(bg);
    }
    for modifier in &attr.modifiers {
        style = style.add_modifier(to_modifier(*modifier));
    }

    style
}

fn to_modifier(modifier: ColorModifier) -> Modifier {
    match modifier {
        ColorModifier::Bold => Modifier::BOLD,
        ColorModifier::Underline => Modifier::UNDERLINED,
    }
}

fn first_color(spec: &str) -> Option<Color> {
    spec.split(SPEC_SEPARATOR)
        .filter(|token| ColorModifier::from_token(token).is_none())
        .find_map(parse_color)
}

/// Parse a color token into a ratatui Color
///
/// Supports:
/// - Indexed identifiers: "h0" to "h255"
/// - Hex colors: "#RRGGBB" or "#RGB"
/// - Named colors: "red", "light_red", "dark_gray", etc.
/// - Bare 256-color index: "0" to "255"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    if let Some(index) = s.strip_prefix('h').and_then(|n| u8::from_str(n).ok()) {
        return Some(Color::Indexed(index));
    }

    if let Ok(index) = u8::from_str(s) {
        return Some(Color::Indexed(index));
    }

    parse_named_color(s)
}

/// Parse a hex color string (#RRGGBB or #RGB)
fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        // #RGB -> #RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn parse_named_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        "lightred" | "light_red" => Some(Color::LightRed),
        "lightgreen" | "light_green" => Some(Color::LightGreen),
        "lightyellow" | "light_yellow" => Some(Color::LightYellow),
        "lightblue" | "light_blue" => Some(Color::LightBlue),
        "lightmagenta" | "light_magenta" => Some(Color::LightMagenta),
        "lightcyan" | "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "reset" | "default" => Some(Color::Reset),
        _ => None,
    }
}
