use std::collections::BTreeSet;
use std::fmt;

use super::directive::{ColorDirective, ColorModifier};

/// Namespace every color rule key lives under
pub const COLOR_NAMESPACE: &str = "color";

/// Report columns a color rule can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Depends,
    Description,
    Due,
    Project,
    Recur,
    Scheduled,
    Start,
    Status,
    Tag,
    Uda,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Depends,
        Category::Description,
        Category::Due,
        Category::Project,
        Category::Recur,
        Category::Scheduled,
        Category::Start,
        Category::Status,
        Category::Tag,
        Category::Uda,
    ];

    /// Parse a column name as it appears in a `color.` key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "depends" => Some(Category::Depends),
            "description" => Some(Category::Description),
            "due" => Some(Category::Due),
            "project" => Some(Category::Project),
            "recur" => Some(Category::Recur),
            "scheduled" => Some(Category::Scheduled),
            "start" => Some(Category::Start),
            "status" => Some(Category::Status),
            "tag" => Some(Category::Tag),
            "uda" => Some(Category::Uda),
            _ => None,
        }
    }

    /// Parse one entry of `rule.precedence.color`.
    ///
    /// Entries look like `project.`, `due.today` or `recurring`; the
    /// qualifier after the first dot is ignored.
    pub fn from_precedence_entry(entry: &str) -> Option<Self> {
        let name = entry.trim().split('.').next().unwrap_or_default();
        match name {
            "recurring" => Some(Category::Recur),
            "active" => Some(Category::Start),
            other => Self::from_name(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Depends => "depends",
            Category::Description => "description",
            Category::Due => "due",
            Category::Project => "project",
            Category::Recur => "recur",
            Category::Scheduled => "scheduled",
            Category::Start => "start",
            Category::Status => "status",
            Category::Tag => "tag",
            Category::Uda => "uda",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed form of a `color.<category>[.<path>...]` key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId {
    pub category: Category,
    pub path: Vec<String>,
}

impl RuleId {
    pub fn new(category: Category, path: Vec<String>) -> Self {
        Self { category, path }
    }

    /// Rule id for a dotted project name such as `Home.Errands`
    pub fn project(name: &str) -> Self {
        Self::new(Category::Project, split_path(name))
    }

    /// Parse a configuration key; `None` for keys outside the recognized
    /// columns
    pub fn parse(key: &str) -> Option<Self> {
        let rest = key.strip_prefix(COLOR_NAMESPACE)?.strip_prefix('.')?;
        let (name, path) = match rest.split_once('.') {
            Some((name, path)) => (name, split_path(path)),
            None => (rest, Vec::new()),
        };
        let category = Category::from_name(name)?;

        // `color.project.` or `color.tag..x` name nothing
        if rest.ends_with('.') || path.iter().any(String::is_empty) {
            return None;
        }

        Some(Self::new(category, path))
    }

    /// Configuration key this id was parsed from
    pub fn key(&self) -> String {
        let mut key = format!("{}.{}", COLOR_NAMESPACE, self.category);
        for segment in &self.path {
            key.push('.');
            key.push_str(segment);
        }
        key
    }

    /// Path segments joined back with dots
    pub fn joined_path(&self) -> String {
        self.path.join(".")
    }

    /// True when `self` is a proper segment-wise ancestor of `other`
    pub fn is_strict_ancestor_of(&self, other: &RuleId) -> bool {
        self.category == other.category
            && self.path.len() < other.path.len()
            && other.path.starts_with(&self.path)
    }

    /// True when `self` names `other` or one of its ancestors
    pub fn is_ancestor_or_self_of(&self, other: &RuleId) -> bool {
        self == other || self.is_strict_ancestor_of(other)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_string).collect()
}

/// Resolved display attribute handed to the renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayAttr {
    pub foreground: String,
    pub background: String,
    pub modifiers: BTreeSet<ColorModifier>,
}

/// A parsed color rule. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRule {
    id: RuleId,
    foreground: String,
    background: String,
    modifiers: BTreeSet<ColorModifier>,
    available: bool,
}

impl ColorRule {
    pub fn from_directive(id: RuleId, directive: &ColorDirective) -> Self {
        Self::new(
            id,
            directive.foreground_spec(),
            directive.background_spec(),
            directive.modifiers.clone(),
        )
    }

    fn new(
        id: RuleId,
        foreground: String,
        background: String,
        modifiers: BTreeSet<ColorModifier>,
    ) -> Self {
        let available = !foreground.is_empty() || !background.is_empty();
        Self {
            id,
            foreground,
            background,
            modifiers,
            available,
        }
    }

    /// Copy of this rule attached to a different id
    pub fn inherit(&self, id: RuleId) -> Self {
        Self::new(
            id,
            self.foreground.clone(),
            self.background.clone(),
            self.modifiers.clone(),
        )
    }

    pub fn id(&self) -> &RuleId {
        &self.id
    }

    pub fn key(&self) -> String {
        self.id.key()
    }

    pub fn category(&self) -> Category {
        self.id.category
    }

    pub fn foreground(&self) -> &str {
        &self.foreground
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn modifiers(&self) -> &BTreeSet<ColorModifier> {
        &self.modifiers
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn display_attr(&self) -> DisplayAttr {
        DisplayAttr {
            foreground: self.foreground.clone(),
            background: self.background.clone(),
            modifiers: self.modifiers.clone(),
        }
    }
}
