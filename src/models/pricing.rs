use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub description: String,
    /// Free-text copy, not normalized keys. May contain a rollup entry
    /// such as "All Free features".
    pub features: Vec<String>,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrixRow {
    pub feature: String,
    /// One flag per tier, in the column order of [`FeatureMatrix::tiers`].
    pub included: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureMatrix {
    pub tiers: Vec<String>,
    pub rows: Vec<FeatureMatrixRow>,
}

impl FeatureMatrix {
    pub fn row(&self, feature: &str) -> Option<&FeatureMatrixRow> {
        self.rows.iter().find(|row| row.feature == feature)
    }

    /// Looks a cell up by feature and tier name.
    pub fn includes(&self, feature: &str, tier: &str) -> Option<bool> {
        let column = self.tiers.iter().position(|name| name == tier)?;
        self.row(feature)
            .and_then(|row| row.included.get(column).copied())
    }
}
