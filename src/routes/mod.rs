pub mod blog;
pub mod contact;
pub mod health_checks;
pub mod home;
pub mod pricing;
pub mod templates;

pub use health_checks::*;
