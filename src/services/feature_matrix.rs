//! Pricing comparison table.
//!
//! Tier copy is free text, so inclusion is decided heuristically:
//! an exact entry, an entry containing the feature's first word, or the
//! rollup entry naming the tier directly below ("All Pro features").
//! Two features sharing a first word are therefore indistinguishable; the
//! published table depends on exactly this behaviour, so keep it.

use crate::models::{FeatureMatrix, FeatureMatrixRow, PricingTier};

/// Entry meaning "everything the tier below has", e.g. `All Free features`.
pub fn rollup_marker(lower_tier: &PricingTier) -> String {
    format!("All {} features", lower_tier.name)
}

pub fn build_matrix(tiers: &[PricingTier], canonical_features: &[String]) -> FeatureMatrix {
    let markers: Vec<Option<String>> = (0..tiers.len())
        .map(|index| index.checked_sub(1).map(|lower| rollup_marker(&tiers[lower])))
        .collect();

    let rows = canonical_features
        .iter()
        .map(|feature| FeatureMatrixRow {
            feature: feature.clone(),
            included: tiers
                .iter()
                .zip(&markers)
                .map(|(tier, marker)| included(feature, tier, marker.as_deref()))
                .collect(),
        })
        .collect();

    FeatureMatrix {
        tiers: tiers.iter().map(|tier| tier.name.clone()).collect(),
        rows,
    }
}

fn included(feature: &str, tier: &PricingTier, rollup: Option<&str>) -> bool {
    let first_word = feature.split_whitespace().next().unwrap_or_default();

    tier.features.iter().any(|entry| entry == feature)
        || tier.features.iter().any(|entry| entry.contains(first_word))
        || rollup.is_some_and(|marker| tier.features.iter().any(|entry| entry == marker))
}
