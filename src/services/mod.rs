pub mod blog;
pub mod catalog_query;
pub mod catalog_state;
pub mod feature_matrix;

pub use catalog_query::{Query, SortKey};
pub use catalog_state::{CatalogEvent, CatalogState, DetailEvent, DetailState, ViewMode};
pub use feature_matrix::build_matrix;
