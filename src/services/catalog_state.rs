//! Gallery and detail page state as plain values.
//!
//! Each user interaction is a [`CatalogEvent`] or [`DetailEvent`]; applying it
//! to a state yields the next state. Nothing is mutated in place, so the
//! catalog logic can be exercised without any presentation layer.

use crate::models::{Category, ParseError, Tier};
use crate::services::catalog_query::{Query, SortKey};
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(ParseError::UnknownView(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    SetSearch(String),
    /// `true` checks the category box, `false` unchecks it.
    ToggleCategory(Category, bool),
    ToggleTier(Tier, bool),
    SetSort(SortKey),
    SetView(ViewMode),
    /// Resets search, filters and sort. The view mode is kept.
    ClearFilters,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogState {
    pub search_term: String,
    pub categories: BTreeSet<Category>,
    pub tiers: BTreeSet<Tier>,
    pub sort: SortKey,
    pub view: ViewMode,
}

impl CatalogState {
    pub fn apply(mut self, event: CatalogEvent) -> Self {
        match event {
            CatalogEvent::SetSearch(term) => self.search_term = term,
            CatalogEvent::ToggleCategory(category, true) => {
                self.categories.insert(category);
            }
            CatalogEvent::ToggleCategory(category, false) => {
                self.categories.remove(&category);
            }
            CatalogEvent::ToggleTier(tier, true) => {
                self.tiers.insert(tier);
            }
            CatalogEvent::ToggleTier(tier, false) => {
                self.tiers.remove(&tier);
            }
            CatalogEvent::SetSort(sort) => self.sort = sort,
            CatalogEvent::SetView(view) => self.view = view,
            CatalogEvent::ClearFilters => {
                return Self {
                    view: self.view,
                    ..Self::default()
                }
            }
        }
        self
    }

    pub fn apply_all(self, events: impl IntoIterator<Item = CatalogEvent>) -> Self {
        events.into_iter().fold(self, Self::apply)
    }

    pub fn query(&self) -> Query {
        Query {
            search_term: self.search_term.clone(),
            categories: self.categories.clone(),
            tiers: self.tiers.clone(),
            sort: self.sort,
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.search_term.is_empty() || !self.categories.is_empty() || !self.tiers.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    UseTemplate,
    DismissUpgrade,
}

/// Template detail page: the only state is whether the upgrade prompt is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailState {
    pub tier: Tier,
    pub upgrade_modal_open: bool,
}

impl DetailState {
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            upgrade_modal_open: false,
        }
    }

    pub fn apply(self, event: DetailEvent) -> Self {
        match event {
            DetailEvent::UseTemplate => Self {
                upgrade_modal_open: !self.tier.is_free(),
                ..self
            },
            DetailEvent::DismissUpgrade => Self {
                upgrade_modal_open: false,
                ..self
            },
        }
    }
}
