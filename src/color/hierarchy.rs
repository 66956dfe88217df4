use tracing::debug;

use super::rule::{Category, ColorRule, RuleId};
use super::store::ColorRuleStore;

/// Propagates project colors down to sub-projects.
///
/// A color on `project.Home` is copied to every known project below it
/// (`Home.Errands`, `Home.Errands.Shop`, ...) that has no available rule of
/// its own. An explicit but empty child rule inherits too. The nearest colored
/// ancestor wins.
pub struct ProjectHierarchyExpander<'a> {
    projects: &'a [String],
}

impl<'a> ProjectHierarchyExpander<'a> {
    pub fn new(projects: &'a [String]) -> Self {
        Self { projects }
    }

    /// Return the store extended with inherited project rules
    pub fn expand(&self, mut store: ColorRuleStore) -> ColorRuleStore {
        // Descending key order puts deeper ancestors first
        let ancestors: Vec<ColorRule> = store.available_in(Category::Project).cloned().collect();
        let mut synthesized = 0;

        for ancestor in &ancestors {
            for project in self.projects {
                let id = RuleId::project(project);
                if id.path.is_empty() || !ancestor.id().is_strict_ancestor_of(&id) {
                    continue;
                }
                if store.insert_unless_available(ancestor.inherit(id)) {
                    synthesized += 1;
                }
            }
        }

        debug!(synthesized, "expanded project color rules");
        store
    }
}
