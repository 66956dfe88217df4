//! Taskwarrior color rules.
//!
//! A [`ColorScheme`] is built once from a configuration snapshot and the
//! known project names, then asked for the display attribute of each row.
//! It never changes after construction; a reload builds a new one.

mod directive;
mod hierarchy;
mod mapping;
mod resolver;
mod rule;
mod store;
pub mod style;

pub use directive::{ColorDirective, ColorModifier};
pub use hierarchy::ProjectHierarchyExpander;
pub use mapping::{expand_bright_aliases, map_base_color, remap_256};
pub use resolver::{PrecedenceResolver, TaskAttributes};
pub use rule::{Category, ColorRule, DisplayAttr, RuleId};
pub use store::{parse_precedence, ColorRuleStore};

use tracing::info;

use crate::taskrc::TaskConfig;

/// Immutable, fully assembled rule set
#[derive(Debug, Clone, Default)]
pub struct ColorScheme {
    store: ColorRuleStore,
    include_subprojects: bool,
}

impl ColorScheme {
    /// Load rules from `config`, expanding project rules over `projects`
    /// when `include_subprojects` is set
    pub fn build(config: &TaskConfig, projects: &[String], include_subprojects: bool) -> Self {
        let mut store = ColorRuleStore::load(config);
        if include_subprojects {
            store = ProjectHierarchyExpander::new(projects).expand(store);
        }

        info!(
            rules = store.len(),
            color_enabled = store.is_color_enabled(),
            include_subprojects,
            "built color scheme"
        );

        Self {
            store,
            include_subprojects,
        }
    }

    pub fn store(&self) -> &ColorRuleStore {
        &self.store
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_color_enabled()
    }

    /// One line per setting and rule, as printed by `tasktable rules`
    pub fn describe(&self) -> Vec<String> {
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        let precedence: Vec<&str> = self
            .store
            .precedence()
            .iter()
            .map(Category::as_str)
            .collect();

        let mut lines = vec![
            format!("color: {}", on_off(self.store.is_color_enabled())),
            format!("include_subprojects: {}", on_off(self.include_subprojects)),
            format!("precedence: {}", precedence.join(",")),
        ];
        lines.extend(self.store.rules().map(|rule| {
            format!(
                "{} fg={} bg={} {}",
                rule.key(),
                rule.foreground(),
                rule.background(),
                if rule.is_available() {
                    "available"
                } else {
                    "unavailable"
                }
            )
        }));
        lines
    }

    /// Rule in effect for a task, if any
    pub fn rule_for<T: TaskAttributes + ?Sized>(&self, task: &T) -> Option<&ColorRule> {
        PrecedenceResolver::new(&self.store, self.include_subprojects).resolve(task)
    }

    /// Display attribute for a task; `None` means default styling
    pub fn resolve<T: TaskAttributes + ?Sized>(&self, task: &T) -> Option<DisplayAttr> {
        self.rule_for(task).map(ColorRule::display_attr)
    }
}
