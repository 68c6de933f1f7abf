pub mod categories;
pub mod public;

pub use public::*;
