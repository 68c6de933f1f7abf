//! Catalog data provisioning.
//!
//! Routes read templates, pricing and blog posts through [`CatalogSource`]
//! and never depend on where the data lives. Today the only source is an
//! in-memory snapshot, either the built-in [`seed`] or a YAML file named in
//! configuration; a database-backed source can replace it behind the same trait.

pub mod seed;

use crate::connectors::config::CatalogConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::{BlogPost, PricingTier, Template};
use actix_web::web;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn templates(&self) -> Result<Vec<Template>, ConnectorError>;
    async fn pricing_tiers(&self) -> Result<Vec<PricingTier>, ConnectorError>;
    /// Every feature name the comparison table lists, in display order.
    async fn canonical_features(&self) -> Result<Vec<String>, ConnectorError>;
    async fn blog_posts(&self) -> Result<Vec<BlogPost>, ConnectorError>;
}

/// Full catalog as loaded from a snapshot file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub pricing_tiers: Vec<PricingTier>,
    #[serde(default)]
    pub canonical_features: Vec<String>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
}

impl CatalogSnapshot {
    /// Closed enums are enforced by deserialization; identifiers are checked here.
    pub fn validate(&self) -> Result<(), ConnectorError> {
        let mut ids = HashSet::new();
        let mut code_names = HashSet::new();
        for template in &self.templates {
            if !ids.insert(template.id.as_str()) {
                return Err(ConnectorError::Integrity(format!(
                    "duplicate template id `{}`",
                    template.id
                )));
            }
            if !code_names.insert(template.code_name.as_str()) {
                return Err(ConnectorError::Integrity(format!(
                    "duplicate template code name `{}`",
                    template.code_name
                )));
            }
        }
        Ok(())
    }
}

pub struct InMemoryCatalog {
    snapshot: CatalogSnapshot,
}

impl InMemoryCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Result<Self, ConnectorError> {
        snapshot.validate()?;
        Ok(Self { snapshot })
    }

    pub fn seeded() -> Self {
        Self {
            snapshot: seed::snapshot(),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConnectorError> {
        let snapshot: CatalogSnapshot = serde_yaml::from_str(content)?;
        Self::new(snapshot)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConnectorError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConnectorError::SnapshotIo {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_yaml_str(&content)
    }
}

#[async_trait::async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn templates(&self) -> Result<Vec<Template>, ConnectorError> {
        Ok(self.snapshot.templates.clone())
    }

    async fn pricing_tiers(&self) -> Result<Vec<PricingTier>, ConnectorError> {
        Ok(self.snapshot.pricing_tiers.clone())
    }

    async fn canonical_features(&self) -> Result<Vec<String>, ConnectorError> {
        Ok(self.snapshot.canonical_features.clone())
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, ConnectorError> {
        Ok(self.snapshot.blog_posts.clone())
    }
}

/// Picks the catalog source for the configured environment.
pub fn init(config: &CatalogConfig) -> Result<web::Data<Arc<dyn CatalogSource>>, ConnectorError> {
    let catalog = match &config.snapshot_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog snapshot");
            InMemoryCatalog::from_yaml_file(path)?
        }
        None => {
            tracing::info!("Using built-in catalog seed data");
            InMemoryCatalog::seeded()
        }
    };

    let source: Arc<dyn CatalogSource> = Arc::new(catalog);
    Ok(web::Data::new(source))
}
