use crate::models::{Category, ParseError, Tier};
use crate::services::{CatalogEvent, CatalogState, SortKey, ViewMode};
use serde::Deserialize;

/// Gallery query string: `?search=gold&category=Classic,Luxury&tier=PRO&sort=newest&view=list`.
#[derive(Debug, Default, Deserialize)]
pub struct TemplateListQuery {
    pub search: Option<String>,
    /// Comma-separated categories
    pub category: Option<String>,
    /// Comma-separated package tiers
    pub tier: Option<String>,
    pub sort: Option<String>, // popular|newest|alphabetical
    pub view: Option<String>, // grid|list
}

fn split_list(raw: &Option<String>) -> impl Iterator<Item = &str> {
    raw.as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl TemplateListQuery {
    /// Replays the query string as the interactions that would have produced it.
    pub fn events(&self) -> Result<Vec<CatalogEvent>, ParseError> {
        let mut events = Vec::new();

        if let Some(search) = &self.search {
            events.push(CatalogEvent::SetSearch(search.clone()));
        }
        for category in split_list(&self.category) {
            events.push(CatalogEvent::ToggleCategory(category.parse::<Category>()?, true));
        }
        for tier in split_list(&self.tier) {
            events.push(CatalogEvent::ToggleTier(tier.parse::<Tier>()?, true));
        }
        if let Some(sort) = self.sort.as_deref().filter(|sort| !sort.trim().is_empty()) {
            events.push(CatalogEvent::SetSort(sort.parse::<SortKey>()?));
        }
        if let Some(view) = self.view.as_deref().filter(|view| !view.trim().is_empty()) {
            events.push(CatalogEvent::SetView(view.parse::<ViewMode>()?));
        }

        Ok(events)
    }

    pub fn to_state(&self) -> Result<CatalogState, ParseError> {
        Ok(CatalogState::default().apply_all(self.events()?))
    }
}

/// `?limit=5` on the blog listing.
#[derive(Debug, Default, Deserialize)]
pub struct BlogListQuery {
    pub limit: Option<usize>,
}
