//! Translation tables between Taskwarrior color names and the identifiers
//! understood by [`super::style`].
//!
//! Taskwarrior knows three 256-color spellings (`color0`-`color255`,
//! `rgb000`-`rgb555` and `gray0`-`gray23`) which all end up as `hN`
//! indexed identifiers here. Plain names (`red`, `white`) already mean the
//! same thing on both sides and pass through untouched.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The eight base colors that accept a `bright` prefix
const BASE_COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Keyword Taskwarrior uses for the high-intensity variant of a base color
const BRIGHT_PREFIX: &str = "bright";

/// Taskwarrior 256-color spelling -> indexed identifier
static TASK_256_TO_INDEXED: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(256 + 216 + 48);

    for index in 0..=255u16 {
        table.insert(format!("color{index}"), indexed(index));
    }

    // 6x6x6 color cube starts at 16
    for r in 0..6u16 {
        for g in 0..6u16 {
            for b in 0..6u16 {
                table.insert(format!("rgb{r}{g}{b}"), indexed(16 + 36 * r + 6 * g + b));
            }
        }
    }

    // 24-step grayscale ramp starts at 232
    for step in 0..24u16 {
        table.insert(format!("gray{step}"), indexed(232 + step));
        table.insert(format!("grey{step}"), indexed(232 + step));
    }

    table
});

fn indexed(index: u16) -> String {
    format!("h{index}")
}

/// Name of the bright variant of a base color
fn bright_variant(color: &str) -> Option<&'static str> {
    match color {
        "black" => Some("dark_gray"),
        "red" => Some("light_red"),
        "green" => Some("light_green"),
        "yellow" => Some("light_yellow"),
        "blue" => Some("light_blue"),
        "magenta" => Some("light_magenta"),
        "cyan" => Some("light_cyan"),
        "white" => Some("white"),
        _ => None,
    }
}

/// Rewrite `bright <color>` and `bright<color>` aliases into a single name.
///
/// This runs on the raw directive, before it is split into sides, so the
/// two-word form never reaches the tokenizer as two separate colors.
/// Words are rejoined with single spaces.
pub fn expand_bright_aliases(directive: &str) -> String {
    let words: Vec<&str> = directive.split_whitespace().collect();
    let mut expanded: Vec<&str> = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        let word = words[i];

        if word == BRIGHT_PREFIX {
            if let Some(variant) = words.get(i + 1).and_then(|next| bright_variant(next)) {
                expanded.push(variant);
                i += 2;
                continue;
            }
        } else if let Some(variant) = word
            .strip_prefix(BRIGHT_PREFIX)
            .filter(|rest| BASE_COLORS.contains(rest))
            .and_then(bright_variant)
        {
            expanded.push(variant);
            i += 1;
            continue;
        }

        expanded.push(word);
        i += 1;
    }

    expanded.join(" ")
}

/// Look up a 256-color token, returning `None` when it is not one
pub fn remap_256(token: &str) -> Option<&'static str> {
    TASK_256_TO_INDEXED.get(token).map(String::as_str)
}

/// Map a base color token, passing unknown tokens through unchanged
pub fn map_base_color(token: &str) -> String {
    remap_256(token).unwrap_or(token).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===================
    // Bright aliases
    // ===================

    #[test]
    fn test_expand_two_word_bright_alias() {
        assert_eq!(expand_bright_aliases("bright red"), "light_red");
        assert_eq!(expand_bright_aliases("bold bright blue"), "bold light_blue");
    }

    #[test]
    fn test_expand_joined_bright_alias() {
        assert_eq!(expand_bright_aliases("brightgreen"), "light_green");
        assert_eq!(expand_bright_aliases("on brightblack"), "on dark_gray");
    }

    #[test]
    fn test_bright_alias_needs_base_color() {
        assert_eq!(expand_bright_aliases("bright"), "bright");
        assert_eq!(expand_bright_aliases("bright color12"), "bright color12");
        assert_eq!(expand_bright_aliases("brightness"), "brightness");
    }

    #[test]
    fn test_expand_collapses_whitespace() {
        assert_eq!(expand_bright_aliases("  red   on  blue "), "red on blue");
        assert_eq!(expand_bright_aliases(""), "");
    }

    // ===================
    // 256-color remap
    // ===================

    #[test]
    fn test_remap_color_index() {
        assert_eq!(remap_256("color0"), Some("h0"));
        assert_eq!(remap_256("color235"), Some("h235"));
        assert_eq!(remap_256("color255"), Some("h255"));
        assert_eq!(remap_256("color256"), None);
    }

    #[test]
    fn test_remap_rgb_cube() {
        assert_eq!(remap_256("rgb000"), Some("h16"));
        assert_eq!(remap_256("rgb500"), Some("h196"));
        assert_eq!(remap_256("rgb555"), Some("h231"));
        assert_eq!(remap_256("rgb600"), None);
    }

    #[test]
    fn test_remap_grayscale() {
        assert_eq!(remap_256("gray0"), Some("h232"));
        assert_eq!(remap_256("grey23"), Some("h255"));
        assert_eq!(remap_256("gray24"), None);
    }

    #[test]
    fn test_map_base_color_passes_unknown_through() {
        assert_eq!(map_base_color("white"), "white");
        assert_eq!(map_base_color("bold"), "bold");
        assert_eq!(map_base_color("chartreuse"), "chartreuse");
        assert_eq!(map_base_color("color9"), "h9");
    }
}
