use super::rule::{Category, ColorRule, RuleId};
use super::store::ColorRuleStore;

/// Read access to the task fields color rules look at.
///
/// `attribute` returns `None` for fields that are missing or empty.
pub trait TaskAttributes {
    fn attribute(&self, name: &str) -> Option<String>;
    fn tags(&self) -> &[String];
}

/// Picks the single effective rule for a task.
///
/// Categories are tried in precedence order and the first one with an
/// available matching rule wins outright.
pub struct PrecedenceResolver<'a> {
    store: &'a ColorRuleStore,
    include_subprojects: bool,
}

impl<'a> PrecedenceResolver<'a> {
    pub fn new(store: &'a ColorRuleStore, include_subprojects: bool) -> Self {
        Self {
            store,
            include_subprojects,
        }
    }

    /// Effective rule for the task, `None` for default styling
    pub fn resolve<T: TaskAttributes + ?Sized>(&self, task: &T) -> Option<&'a ColorRule> {
        if !self.store.is_color_enabled() {
            return None;
        }

        self.store
            .precedence()
            .iter()
            .find_map(|&category| self.first_match(category, task))
    }

    fn first_match<T: TaskAttributes + ?Sized>(
        &self,
        category: Category,
        task: &T,
    ) -> Option<&'a ColorRule> {
        let store: &'a ColorRuleStore = self.store;
        store
            .available_in(category)
            .find(|rule| self.matches(rule.id(), task))
    }

    fn matches<T: TaskAttributes + ?Sized>(&self, id: &RuleId, task: &T) -> bool {
        let has = |name: &str| task.attribute(name).is_some();
        let equals = |name: &str| task.attribute(name).as_deref() == Some(id.joined_path().as_str());

        match id.category {
            Category::Project => {
                let Some(project) = task.attribute("project") else {
                    return false;
                };
                let project = RuleId::project(&project);
                if id.path.is_empty() {
                    false
                } else if self.include_subprojects {
                    id.is_ancestor_or_self_of(&project)
                } else {
                    *id == project
                }
            }
            Category::Tag => match id.path.as_slice() {
                [] => !task.tags().is_empty(),
                [none] if none == "none" => task.tags().is_empty(),
                _ => {
                    let tag = id.joined_path();
                    task.tags().iter().any(|t| *t == tag)
                }
            },
            Category::Status => id.path.is_empty() || equals("status"),
            Category::Due | Category::Scheduled | Category::Start | Category::Depends => {
                id.path.is_empty() && has(id.category.as_str())
            }
            Category::Recur => {
                if id.path.is_empty() {
                    has("recur")
                } else {
                    equals("recur")
                }
            }
            Category::Description => {
                !id.path.is_empty()
                    && task
                        .attribute("description")
                        .is_some_and(|d| d.contains(&id.joined_path()))
            }
            Category::Uda => match id.path.split_first() {
                None => false,
                Some((name, [])) => has(name.as_str()),
                Some((name, value)) => {
                    task.attribute(name).as_deref() == Some(value.join(".").as_str())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::color::hierarchy::ProjectHierarchyExpander;
    use crate::taskrc::TaskConfig;

    #[derive(Default)]
    struct FakeTask {
        attributes: HashMap<String, String>,
        tags: Vec<String>,
    }

    impl FakeTask {
        fn with(mut self, name: &str, value: &str) -> Self {
            self.attributes.insert(name.to_string(), value.to_string());
            self
        }

        fn tagged(mut self, tag: &str) -> Self {
            self.tags.push(tag.to_string());
            self
        }
    }

    impl TaskAttributes for FakeTask {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.get(name).filter(|v| !v.is_empty()).cloned()
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }
    }

    fn load(pairs: &[(&str, &str)]) -> ColorRuleStore {
        ColorRuleStore::load(&TaskConfig::from_pairs(pairs.iter().copied()))
    }

    fn resolved_key(store: &ColorRuleStore, task: &FakeTask) -> Option<String> {
        PrecedenceResolver::new(store, false)
            .resolve(task)
            .map(|rule| rule.key())
    }

    // ===================
    // Precedence
    // ===================

    #[test]
    fn test_first_category_in_precedence_wins() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "due,tag"),
            ("color.due", "red"),
            ("color.tag.next", "blue"),
        ]);
        let task = FakeTask::default().with("due", "2024-01-01").tagged("next");

        assert_eq!(resolved_key(&store, &task), Some("color.due".to_string()));

        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "tag,due"),
            ("color.due", "red"),
            ("color.tag.next", "blue"),
        ]);
        assert_eq!(resolved_key(&store, &task), Some("color.tag.next".to_string()));
    }

    #[test]
    fn test_category_missing_from_precedence_never_applies() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "project"),
            ("color.due", "red"),
        ]);
        let task = FakeTask::default().with("due", "2024-01-01");

        assert_eq!(resolved_key(&store, &task), None);
    }

    #[test]
    fn test_unavailable_rule_falls_through() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "due,tag"),
            ("color.due", ""),
            ("color.tag.next", "blue"),
        ]);
        let task = FakeTask::default().with("due", "2024-01-01").tagged("next");

        assert_eq!(resolved_key(&store, &task), Some("color.tag.next".to_string()));
    }

    #[test]
    fn test_color_disabled_resolves_nothing() {
        let store = load(&[
            ("color", "off"),
            ("rule.precedence.color", "due"),
            ("color.due", "red"),
        ]);
        let task = FakeTask::default().with("due", "2024-01-01");

        assert_eq!(resolved_key(&store, &task), None);
    }

    // ===================
    // Category matching
    // ===================

    #[test]
    fn test_project_exact_match_only_without_subprojects() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "project"),
            ("color.project.Home", "red"),
        ]);
        let child = FakeTask::default().with("project", "Home.Errands");
        let exact = FakeTask::default().with("project", "Home");

        assert_eq!(resolved_key(&store, &child), None);
        assert_eq!(
            resolved_key(&store, &exact),
            Some("color.project.Home".to_string())
        );
    }

    #[test]
    fn test_project_ancestor_matches_with_subprojects() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "project"),
            ("color.project.Home", "red"),
            ("color.project.Home.Errands", "blue"),
        ]);
        let resolver = PrecedenceResolver::new(&store, true);

        let deep = FakeTask::default().with("project", "Home.Errands.Shop");
        let rule = resolver.resolve(&deep).unwrap();
        assert_eq!(rule.key(), "color.project.Home.Errands");

        let sibling = FakeTask::default().with("project", "Home.Garden");
        let rule = resolver.resolve(&sibling).unwrap();
        assert_eq!(rule.key(), "color.project.Home");
    }

    #[test]
    fn test_expanded_rule_resolves_for_child() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "project"),
            ("color.project.Home", "red"),
        ]);
        let names = vec!["Home.Errands".to_string()];
        let store = ProjectHierarchyExpander::new(&names).expand(store);
        let task = FakeTask::default().with("project", "Home.Errands");

        let rule = PrecedenceResolver::new(&store, true).resolve(&task).unwrap();
        assert_eq!(rule.key(), "color.project.Home.Errands");
        assert_eq!(rule.foreground(), "red");
    }

    #[test]
    fn test_tag_rules() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "tag"),
            ("color.tag.next", "red"),
            ("color.tag.none", "blue"),
        ]);

        let next = FakeTask::default().tagged("home").tagged("next");
        assert_eq!(resolved_key(&store, &next), Some("color.tag.next".to_string()));

        let untagged = FakeTask::default();
        assert_eq!(resolved_key(&store, &untagged), Some("color.tag.none".to_string()));

        let other = FakeTask::default().tagged("home");
        assert_eq!(resolved_key(&store, &other), None);
    }

    #[test]
    fn test_status_rules() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "status"),
            ("color.status.waiting", "gray"),
        ]);

        let waiting = FakeTask::default().with("status", "waiting");
        let pending = FakeTask::default().with("status", "pending");
        assert_eq!(
            resolved_key(&store, &waiting),
            Some("color.status.waiting".to_string())
        );
        assert_eq!(resolved_key(&store, &pending), None);
    }

    #[test]
    fn test_date_rules_need_the_date() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "scheduled,start,due"),
            ("color.scheduled", "green"),
            ("color.start", "yellow"),
            ("color.due.today", "red"),
        ]);

        let started = FakeTask::default().with("start", "2024-01-01");
        assert_eq!(resolved_key(&store, &started), Some("color.start".to_string()));

        let due = FakeTask::default().with("due", "2024-01-01");
        assert_eq!(resolved_key(&store, &due), None);
    }

    #[test]
    fn test_recur_and_depends_rules() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "depends,recur"),
            ("color.depends", "magenta"),
            ("color.recur.weekly", "cyan"),
        ]);

        let blocked = FakeTask::default().with("depends", "abc");
        assert_eq!(resolved_key(&store, &blocked), Some("color.depends".to_string()));

        let weekly = FakeTask::default().with("recur", "weekly");
        assert_eq!(
            resolved_key(&store, &weekly),
            Some("color.recur.weekly".to_string())
        );

        let daily = FakeTask::default().with("recur", "daily");
        assert_eq!(resolved_key(&store, &daily), None);
    }

    #[test]
    fn test_description_keyword_rule() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "description"),
            ("color.description.urgent", "red"),
        ]);

        let hit = FakeTask::default().with("description", "call the urgent care");
        let miss = FakeTask::default().with("description", "water plants");
        assert!(PrecedenceResolver::new(&store, false).resolve(&hit).is_some());
        assert!(PrecedenceResolver::new(&store, false).resolve(&miss).is_none());
    }

    #[test]
    fn test_uda_rules() {
        let store = load(&[
            ("color", "on"),
            ("rule.precedence.color", "uda"),
            ("color.uda.priority.H", "bold red"),
            ("color.uda.estimate", "blue"),
        ]);

        let high = FakeTask::default().with("priority", "H");
        assert_eq!(
            resolved_key(&store, &high),
            Some("color.uda.priority.H".to_string())
        );

        let estimated = FakeTask::default().with("estimate", "3");
        assert_eq!(
            resolved_key(&store, &estimated),
            Some("color.uda.estimate".to_string())
        );

        let low = FakeTask::default().with("priority", "L");
        assert_eq!(resolved_key(&store, &low), None);
    }
}
