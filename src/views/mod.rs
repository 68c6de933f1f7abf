pub mod template;

pub use template::{Home, Listing, TemplateDetail, UpgradeNotice};
