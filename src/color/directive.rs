//! Parsing of a single Taskwarrior color directive such as
//! `"bold white on color235"`.
//!
//! A directive goes through a fixed sequence of stages, each a small
//! function below: alias expansion, marker split, inverse resolution,
//! modifier partition and base-color remap.

use std::collections::BTreeSet;
use std::fmt;

use super::mapping::{expand_bright_aliases, map_base_color};

/// Keyword separating the foreground half from the background half
const BACKGROUND_MARKER: &str = "on";

/// Keyword that swaps foreground and background
const INVERSE: &str = "inverse";

/// Separator used when joining a side back into a spec string
pub const SPEC_SEPARATOR: &str = ",";

/// Text attributes a directive may carry besides colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorModifier {
    Bold,
    Underline,
}

impl ColorModifier {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "bold" => Some(ColorModifier::Bold),
            "underline" => Some(ColorModifier::Underline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorModifier::Bold => "bold",
            ColorModifier::Underline => "underline",
        }
    }
}

impl fmt::Display for ColorModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_modifier(token: &str) -> bool {
    ColorModifier::from_token(token).is_some()
}

/// Parsed form of a color directive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDirective {
    /// Foreground tokens, base color first, modifiers last
    pub foreground: Vec<String>,
    /// Background tokens, base color first, modifiers last
    pub background: Vec<String>,
    /// Modifiers found on either side
    pub modifiers: BTreeSet<ColorModifier>,
}

impl ColorDirective {
    /// Parse a raw directive. Never fails; garbage yields garbage tokens
    /// which the renderer ignores, and empty input yields an empty directive.
    pub fn parse(raw: &str) -> Self {
        let expanded = expand_bright_aliases(raw);
        let (foreground, background) = split_sides(expanded.trim());
        let (foreground, background) = resolve_inverse(foreground, background);

        let foreground = remap_base(partition_modifiers(foreground));
        let background = remap_base(partition_modifiers(background));

        let modifiers = foreground
            .iter()
            .chain(background.iter())
            .filter_map(|token| ColorModifier::from_token(token))
            .collect();

        Self {
            foreground,
            background,
            modifiers,
        }
    }

    /// Foreground side joined into a spec string
    pub fn foreground_spec(&self) -> String {
        self.foreground.join(SPEC_SEPARATOR)
    }

    /// Background side joined into a spec string
    pub fn background_spec(&self) -> String {
        self.background.join(SPEC_SEPARATOR)
    }

    /// A directive is usable when at least one side is non-empty
    pub fn is_available(&self) -> bool {
        !self.foreground.is_empty() || !self.background.is_empty()
    }
}

/// Split at the first marker. Anything after a second marker is dropped.
fn split_sides(directive: &str) -> (Vec<String>, Vec<String>) {
    let mut parts: Vec<Vec<String>> = vec![Vec::new()];

    for token in directive.split_whitespace() {
        if token == BACKGROUND_MARKER {
            parts.push(Vec::new());
        } else if let Some(part) = parts.last_mut() {
            part.push(token.to_string());
        }
    }

    let mut parts = parts.into_iter();
    let foreground = parts.next().unwrap_or_default();
    let background = parts.next().unwrap_or_default();
    (foreground, background)
}

/// Drop every `inverse` token and swap the sides once if any was present
fn resolve_inverse(
    mut foreground: Vec<String>,
    mut background: Vec<String>,
) -> (Vec<String>, Vec<String>) {
    let before = foreground.len() + background.len();
    foreground.retain(|token| token != INVERSE);
    background.retain(|token| token != INVERSE);

    if foreground.len() + background.len() < before {
        (background, foreground)
    } else {
        (foreground, background)
    }
}

/// Stable two-bucket split: colors first, then modifiers
fn partition_modifiers(tokens: Vec<String>) -> Vec<String> {
    let (mut colors, modifiers): (Vec<_>, Vec<_>) =
        tokens.into_iter().partition(|token| !is_modifier(token));
    colors.extend(modifiers);
    colors
}

/// Only the first token is a base color
fn remap_base(mut tokens: Vec<String>) -> Vec<String> {
    if let Some(first) = tokens.first_mut() {
        *first = map_base_color(first);
    }
    tokens
}
