pub mod contact;
pub mod template_query;

pub use contact::ContactForm;
pub use template_query::{BlogListQuery, TemplateListQuery};
