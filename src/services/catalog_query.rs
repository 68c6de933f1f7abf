//! Catalog query engine.
//!
//! Turns a template list plus a [`Query`] into the ordered subsequence the
//! gallery renders. Everything here is pure: inputs are borrowed, never
//! mutated, and the result only ever references items of the input slice.

use crate::models::{Category, ParseError, Template, Tier};
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How many related templates the detail page shows.
pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Featured templates first, otherwise input order.
    #[default]
    Popular,
    /// Descending `id`. Ids are the only recency signal in the data.
    Newest,
    Alphabetical,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::Newest => "newest",
            SortKey::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popular" => Ok(SortKey::Popular),
            "newest" => Ok(SortKey::Newest),
            "alphabetical" => Ok(SortKey::Alphabetical),
            _ => Err(ParseError::UnknownSort(s.to_string())),
        }
    }
}

/// One gallery request. Empty filter sets do not restrict anything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    pub search_term: String,
    pub categories: BTreeSet<Category>,
    pub tiers: BTreeSet<Tier>,
    pub sort: SortKey,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.tiers.insert(tier);
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Filters and orders `items` according to `query`.
pub fn apply<'a>(items: &'a [Template], query: &Query) -> Vec<&'a Template> {
    let term = query.search_term.to_lowercase();

    let mut matched: Vec<&Template> = items
        .iter()
        .filter(|item| matches_text(item, &term))
        .filter(|item| matches_category(item, &query.categories))
        .filter(|item| matches_tier(item, &query.tiers))
        .collect();

    // sort_by is stable, ties keep their input order
    match query.sort {
        SortKey::Alphabetical => matched.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Newest => matched.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::Popular => matched.sort_by_key(|item| !item.featured),
    }

    tracing::debug!(
        total = items.len(),
        shown = matched.len(),
        sort = %query.sort,
        "Catalog query applied"
    );
    matched
}

/// `term` is expected lowercased already.
fn matches_text(item: &Template, term: &str) -> bool {
    term.is_empty()
        || item.name.to_lowercase().contains(term)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

fn matches_category(item: &Template, categories: &BTreeSet<Category>) -> bool {
    categories.is_empty() || categories.contains(&item.category)
}

fn matches_tier(item: &Template, tiers: &BTreeSet<Tier>) -> bool {
    tiers.is_empty() || tiers.contains(&item.tier)
}

pub fn find_by_code_name<'a>(items: &'a [Template], code_name: &str) -> Option<&'a Template> {
    items.iter().find(|item| item.code_name == code_name)
}

pub fn featured(items: &[Template]) -> Vec<&Template> {
    items.iter().filter(|item| item.featured).collect()
}

pub fn by_category(items: &[Template], category: Category) -> Vec<&Template> {
    items.iter().filter(|item| item.category == category).collect()
}

/// Other templates of the same category, in catalog order.
pub fn related<'a>(items: &'a [Template], template: &Template, limit: usize) -> Vec<&'a Template> {
    items
        .iter()
        .filter(|item| item.category == template.category && item.id != template.id)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::catalog::seed;

    fn template(id: &str, name: &str, tags: &[&str], category: Category, tier: Tier, featured: bool) -> Template {
        Template {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            code_name: name.to_uppercase().replace(' ', "_"),
            preview_image_url: String::new(),
            tier,
            category,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            colors: vec![],
            demo_url: String::new(),
            featured,
        }
    }

    fn two_items() -> Vec<Template> {
        vec![
            template("t1", "Classic Wedding Invite", &["elegant"], Category::Classic, Tier::Premium, true),
            template("t2", "Simple Elegance", &["simple"], Category::Minimal, Tier::Free, false),
        ]
    }

    fn names(result: &[&Template]) -> Vec<String> {
        result.iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn popular_puts_featured_first() {
        let items = two_items();
        let result = apply(&items, &Query::new());
        assert_eq!(names(&result), vec!["Classic Wedding Invite", "Simple Elegance"]);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let items = two_items();
        let result = apply(&items, &Query::new().search("simple"));
        assert_eq!(names(&result), vec!["Simple Elegance"]);

        let result = apply(&items, &Query::new().search("WEDDING"));
        assert_eq!(names(&result), vec!["Classic Wedding Invite"]);
    }

    #[test]
    fn search_matches_tags() {
        let items = two_items();
        // "elegant" is a tag of the first item and a substring of the second's name
        let result = apply(&items, &Query::new().search("elegan"));
        assert_eq!(result.len(), 2);

        let result = apply(&seed::templates(), &Query::new().search("garden"))
            .into_iter()
            .map(|item| item.code_name.clone())
            .collect::<Vec<_>>();
        assert_eq!(result, vec!["BOTANICAL_BLISS"]);
    }

    #[test]
    fn tier_filter_restricts_to_members() {
        let items = two_items();
        let result = apply(&items, &Query::new().tier(Tier::Free));
        assert_eq!(names(&result), vec!["Simple Elegance"]);
    }

    #[test]
    fn category_filter_accepts_any_member() {
        let items = seed::templates();
        let query = Query::new().category(Category::Floral).category(Category::Luxury);
        let result = apply(&items, &query);
        assert_eq!(result.len(), 3);
        assert!(result
            .iter()
            .all(|item| matches!(item.category, Category::Floral | Category::Luxury)));
    }

    #[test]
    fn no_match_and_empty_input_give_empty_results() {
        let items = two_items();
        assert!(apply(&items, &Query::new().search("zeppelin")).is_empty());
        assert!(apply(&[], &Query::new()).is_empty());
    }

    #[test]
    fn popular_keeps_input_order_among_equal_featured_flags() {
        let items = vec![
            template("c", "Zeta", &[], Category::Luxury, Tier::Pro, false),
            template("a", "Alpha", &[], Category::Boho, Tier::Pro, false),
            template("b", "Mid", &[], Category::Classic, Tier::Pro, false),
        ];
        let result = apply(&items, &Query::new());
        assert_eq!(names(&result), vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn alphabetical_keeps_input_order_for_equal_names() {
        let items = vec![
            template("t1", "Garden Party", &[], Category::Floral, Tier::Free, false),
            template("t2", "Arch", &[], Category::Modern, Tier::Pro, false),
            template("t3", "Garden Party", &[], Category::Boho, Tier::Premium, true),
        ];

        let result = apply(&items, &Query::new().sort(SortKey::Alphabetical));

        let ids: Vec<&str> = result.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1", "t3"]);
    }

    #[test]
    fn newest_keeps_input_order_for_equal_ids() {
        let items = vec![
            template("t1", "First Copy", &[], Category::Classic, Tier::Free, false),
            template("t2", "Later", &[], Category::Modern, Tier::Free, false),
            template("t1", "Second Copy", &[], Category::Luxury, Tier::Free, true),
        ];

        let result = apply(&items, &Query::new().sort(SortKey::Newest));

        assert_eq!(names(&result), vec!["Later", "First Copy", "Second Copy"]);
    }

    #[test]
    fn popular_is_stable_within_featured_group() {
        let items = seed::templates();
        let result = apply(&items, &Query::new());
        let ids: Vec<&str> = result.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "wedding_template_001",
                "wedding_template_002",
                "wedding_template_003",
                "wedding_template_004",
                "wedding_template_005",
                "wedding_template_006",
                "wedding_template_007",
                "wedding_template_008",
            ]
        );
    }

    #[test]
    fn newest_sorts_ids_descending() {
        let items = seed::templates();
        let result = apply(&items, &Query::new().sort(SortKey::Newest));
        assert_eq!(result.first().map(|item| item.id.as_str()), Some("wedding_template_008"));
        assert_eq!(result.last().map(|item| item.id.as_str()), Some("wedding_template_001"));
    }

    #[test]
    fn alphabetical_sort_is_idempotent() {
        let items = seed::templates();
        let query = Query::new().sort(SortKey::Alphabetical);
        let once: Vec<Template> = apply(&items, &query).into_iter().cloned().collect();
        let twice: Vec<Template> = apply(&once, &query).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert_eq!(once.first().map(|item| item.name.as_str()), Some("Bohemian Dream"));
    }

    #[test]
    fn result_is_a_subsequence_of_the_input() {
        let items = seed::templates();
        let queries = [
            Query::new(),
            Query::new().search("a").sort(SortKey::Alphabetical),
            Query::new().tier(Tier::Pro).sort(SortKey::Newest),
            Query::new().category(Category::Classic).tier(Tier::Free),
        ];

        for query in queries {
            let result = apply(&items, &query);
            let mut seen = BTreeSet::new();
            for item in &result {
                assert!(items.iter().any(|candidate| std::ptr::eq(candidate, *item)));
                assert!(seen.insert(item.id.clone()), "duplicate {}", item.id);
            }
        }
    }

    #[test]
    fn predicate_order_does_not_change_the_filtered_set() {
        let items = seed::templates();
        let query = Query::new().search("e").category(Category::Classic).category(Category::Floral).tier(Tier::Pro);
        let term = query.search_term.to_lowercase();

        let combined: BTreeSet<String> = apply(&items, &query).into_iter().map(|item| item.id.clone()).collect();
        let reversed: BTreeSet<String> = items
            .iter()
            .filter(|item| matches_tier(item, &query.tiers))
            .filter(|item| matches_category(item, &query.categories))
            .filter(|item| matches_text(item, &term))
            .map(|item| item.id.clone())
            .collect();
        assert_eq!(combined, reversed);
        assert!(!combined.is_empty());
    }

    #[test]
    fn related_excludes_self_and_other_categories() {
        let items = seed::templates();
        let classic = find_by_code_name(&items, "CLASSIC_WEDDING").unwrap();
        let related = related(&items, classic, RELATED_LIMIT);
        assert_eq!(
            related.iter().map(|item| item.code_name.as_str()).collect::<Vec<_>>(),
            vec!["VINTAGE_CLASSIC"]
        );
        assert!(find_by_code_name(&items, "NOPE").is_none());
    }

    #[test]
    fn helpers_select_featured_and_by_category() {
        let items = seed::templates();
        assert_eq!(featured(&items).len(), 3);
        assert_eq!(by_category(&items, Category::Floral).len(), 2);
        assert!(by_category(&items, Category::Modern).iter().all(|item| item.category == Category::Modern));
    }

    #[test]
    fn sort_key_parses_known_names() {
        assert_eq!("Newest".parse::<SortKey>(), Ok(SortKey::Newest));
        assert_eq!(SortKey::default(), SortKey::Popular);
        assert!("rating".parse::<SortKey>().is_err());
    }
}
