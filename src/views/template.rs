use crate::models::{BlogPost, Category, Template, Tier};
use crate::services::{CatalogState, ViewMode};
use serde::Serialize;

/// Gallery page: the matching templates plus what the header needs to say
/// "Showing 3 of 8 templates".
#[derive(Debug, Serialize)]
pub struct Listing {
    pub total: usize,
    pub shown: usize,
    pub view: ViewMode,
    pub has_filters: bool,
    pub templates: Vec<Template>,
}

impl Listing {
    pub fn new(total: usize, templates: Vec<Template>, state: &CatalogState) -> Self {
        Self {
            total,
            shown: templates.len(),
            view: state.view,
            has_filters: state.has_filters(),
            templates,
        }
    }
}

/// Shown instead of the editor when a paid template is used without the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeNotice {
    pub title: String,
    pub message: String,
    pub required_tier: Tier,
    pub pricing_tier: String,
}

impl UpgradeNotice {
    /// `None` for free templates.
    pub fn for_tier(tier: Tier) -> Option<Self> {
        if tier.is_free() {
            return None;
        }
        Some(Self {
            title: "Upgrade Required".to_string(),
            message: format!(
                "This template requires a {} plan. Upgrade now to unlock this template and many more premium features.",
                tier.display_name().to_lowercase()
            ),
            required_tier: tier,
            pricing_tier: tier.display_name().to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateDetail {
    pub template: Template,
    pub related: Vec<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade: Option<UpgradeNotice>,
}

#[derive(Debug, Serialize)]
pub struct Home {
    pub featured: Vec<Template>,
    pub latest_posts: Vec<BlogPost>,
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_templates_need_no_upgrade() {
        assert!(UpgradeNotice::for_tier(Tier::Free).is_none());
    }

    #[test]
    fn paid_templates_name_the_plan() {
        let notice = UpgradeNotice::for_tier(Tier::Premium).unwrap();
        assert_eq!(notice.pricing_tier, "Premium");
        assert!(notice.message.contains("premium plan"));
    }
}
