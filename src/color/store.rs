use std::collections::BTreeMap;

use tracing::debug;

use super::directive::ColorDirective;
use super::rule::{Category, ColorRule, RuleId, COLOR_NAMESPACE};
use crate::taskrc::{TaskConfig, COLOR_KEY, COLOR_PRECEDENCE_KEY};

/// All color rules loaded from a configuration snapshot.
///
/// Rules are keyed by their configuration key, so iterating in reverse
/// yields the descending lexical order the resolver scans in.
#[derive(Debug, Clone, Default)]
pub struct ColorRuleStore {
    rules: BTreeMap<String, ColorRule>,
    color_enabled: bool,
    precedence: Vec<Category>,
}

impl ColorRuleStore {
    /// Parse every recognized `color.` entry of the configuration
    pub fn load(config: &TaskConfig) -> Self {
        let prefix = format!("{COLOR_NAMESPACE}.");
        let mut rules = BTreeMap::new();

        for (key, value) in config.entries_with_prefix(&prefix) {
            let Some(id) = RuleId::parse(key) else {
                debug!(key, "ignoring color key for unknown column");
                continue;
            };
            let rule = ColorRule::from_directive(id, &ColorDirective::parse(value));
            rules.insert(key.to_string(), rule);
        }

        let store = Self {
            rules,
            color_enabled: config.get_bool(COLOR_KEY),
            precedence: parse_precedence(config.get(COLOR_PRECEDENCE_KEY).unwrap_or_default()),
        };

        debug!(
            rules = store.rules.len(),
            available = store.available_count(),
            color_enabled = store.color_enabled,
            "loaded color rules"
        );

        store
    }

    pub fn is_color_enabled(&self) -> bool {
        self.color_enabled
    }

    pub fn precedence(&self) -> &[Category] {
        &self.precedence
    }

    pub fn get(&self, id: &RuleId) -> Option<&ColorRule> {
        self.rules.get(&id.key())
    }

    /// True when the key has a rule, available or not
    pub fn contains(&self, id: &RuleId) -> bool {
        self.rules.contains_key(&id.key())
    }

    /// Every rule in ascending key order
    pub fn rules(&self) -> impl Iterator<Item = &ColorRule> {
        self.rules.values()
    }

    /// Available rules of one category, most specific key first
    pub fn available_in(&self, category: Category) -> impl Iterator<Item = &ColorRule> {
        self.rules
            .values()
            .rev()
            .filter(move |rule| rule.category() == category && rule.is_available())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn available_count(&self) -> usize {
        self.rules.values().filter(|r| r.is_available()).count()
    }

    /// Add a synthesized rule unless the key already holds an available rule.
    /// An explicit but empty rule is replaced.
    pub(crate) fn insert_unless_available(&mut self, rule: ColorRule) -> bool {
        let key = rule.key();
        if self.rules.get(&key).is_some_and(ColorRule::is_available) {
            return false;
        }
        self.rules.insert(key, rule);
        true
    }
}

/// Parse `rule.precedence.color`. Unknown entries are dropped and the first
/// occurrence of a category decides its position.
pub fn parse_precedence(raw: &str) -> Vec<Category> {
    let mut precedence = Vec::new();

    for entry in raw.split(',') {
        match Category::from_precedence_entry(entry) {
            Some(category) if !precedence.contains(&category) => precedence.push(category),
            Some(_) => {}
            None => {
                if !entry.trim().is_empty() {
                    debug!(entry = entry.trim(), "ignoring precedence entry");
                }
            }
        }
    }

    precedence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> ColorRuleStore {
        ColorRuleStore::load(&TaskConfig::from_pairs(pairs.iter().copied()))
    }

    #[test]
    fn test_load_recognized_columns_only() {
        let store = store(&[
            ("color.due", "red"),
            ("color.tag.next", "bold"),
            ("color.alternate", "on gray2"),
            ("color.header", "yellow"),
            ("color.project.Home.Errands.Shop", "green"),
        ]);

        assert_eq!(store.len(), 3);
        assert!(store.contains(&RuleId::parse("color.due").unwrap()));
        assert!(store.contains(&RuleId::project("Home.Errands.Shop")));
        assert!(!store.rules().any(|r| r.key() == "color.alternate"));
    }

    #[test]
    fn test_load_keeps_unavailable_rules() {
        let store = store(&[("color.due", ""), ("color.tag.next", "red")]);

        let due = store.get(&RuleId::parse("color.due").unwrap()).unwrap();
        assert!(!due.is_available());
        assert_eq!(store.available_in(Category::Due).count(), 0);
        assert_eq!(store.available_in(Category::Tag).count(), 1);
    }

    #[test]
    fn test_available_in_descending_order() {
        let store = store(&[
            ("color.project.Home", "red"),
            ("color.project.Home.Errands", "blue"),
            ("color.project.Work", "green"),
        ]);

        let keys: Vec<String> = store.available_in(Category::Project).map(|r| r.key()).collect();
        assert_eq!(
            keys,
            vec![
                "color.project.Work",
                "color.project.Home.Errands",
                "color.project.Home",
            ]
        );
    }

    #[test]
    fn test_color_enabled_flag() {
        assert!(store(&[("color", "on")]).is_color_enabled());
        assert!(!store(&[("color", "off")]).is_color_enabled());
        assert!(!store(&[("color", "sometimes")]).is_color_enabled());
        assert!(!store(&[]).is_color_enabled());
    }

    #[test]
    fn test_precedence_read_from_rule_key() {
        let store = store(&[(COLOR_PRECEDENCE_KEY, "due,project.,tag.")]);
        assert_eq!(
            store.precedence(),
            &[Category::Due, Category::Project, Category::Tag]
        );
    }

    #[test]
    fn test_parse_precedence_taskwarrior_default() {
        let precedence = parse_precedence(
            "deleted,completed,active,keyword.,tag.,project.,overdue,scheduled,due.today,due,blocked,blocking,recurring,tagged,uda.",
        );
        assert_eq!(
            precedence,
            vec![
                Category::Start,
                Category::Tag,
                Category::Project,
                Category::Scheduled,
                Category::Due,
                Category::Recur,
                Category::Uda,
            ]
        );
    }

    #[test]
    fn test_parse_precedence_empty() {
        assert!(parse_precedence("").is_empty());
        assert!(parse_precedence(" , ,").is_empty());
    }

    #[test]
    fn test_insert_keeps_available_rule() {
        let mut store = store(&[("color.project.Home.Errands", "blue")]);
        let inherited = ColorRule::from_directive(
            RuleId::project("Home.Errands"),
            &ColorDirective::parse("red"),
        );

        assert!(!store.insert_unless_available(inherited));
        let rule = store.get(&RuleId::project("Home.Errands")).unwrap();
        assert_eq!(rule.foreground(), "blue");
    }

    #[test]
    fn test_insert_replaces_empty_rule() {
        let mut store = store(&[("color.project.Home.Errands", "")]);
        let inherited = ColorRule::from_directive(
            RuleId::project("Home.Errands"),
            &ColorDirective::parse("red"),
        );

        assert!(store.insert_unless_available(inherited));
        let rule = store.get(&RuleId::project("Home.Errands")).unwrap();
        assert!(rule.is_available());
        assert_eq!(rule.foreground(), "red");
        assert_eq!(store.len(), 1);
    }
}
