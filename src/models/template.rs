use crate::models::ParseError;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Design-style classification of a template. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Classic,
    Modern,
    Floral,
    Minimal,
    Boho,
    Luxury,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Classic,
        Category::Modern,
        Category::Floral,
        Category::Minimal,
        Category::Boho,
        Category::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Classic => "Classic",
            Category::Modern => "Modern",
            Category::Floral => "Floral",
            Category::Minimal => "Minimal",
            Category::Boho => "Boho",
            Category::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// Package level a template requires. Ordered from the cheapest to the most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Free,
    Pro,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Pro, Tier::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "FREE",
            Tier::Pro => "PRO",
            Tier::Premium => "PREMIUM",
        }
    }

    /// Name of the pricing tier selling this package.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Pro => "Pro",
            Tier::Premium => "Premium",
        }
    }

    pub fn is_free(&self) -> bool {
        *self == Tier::Free
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownTier(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub code_name: String,
    pub preview_image_url: String,
    pub tier: Tier,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub demo_url: String,
    #[serde(default)]
    pub featured: bool,
}
