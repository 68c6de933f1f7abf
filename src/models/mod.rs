mod blog;
mod contact;
mod errors;
mod pricing;
mod template;

pub use blog::*;
pub use contact::*;
pub use errors::*;
pub use pricing::*;
pub use template::*;
