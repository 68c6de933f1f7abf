//! External collaborators.
//!
//! Catalog data and contact delivery sit behind traits so that routes never
//! know where data comes from or how messages leave the service.
//!
//! 1. Define the trait next to its implementation → allows test doubles
//! 2. Configuration in `config.rs`
//! 3. `init` builds the trait object that `startup::run` injects into routes

pub mod catalog;
pub mod config;
pub mod contact;
pub mod errors;

pub use catalog::{CatalogSnapshot, CatalogSource, InMemoryCatalog};
pub use config::{CatalogConfig, ConnectorConfig, ContactConfig};
pub use contact::{ContactConnector, SimulatedContactService};
pub use errors::ConnectorError;

pub use catalog::init as init_catalog;
pub use contact::init as init_contact;
