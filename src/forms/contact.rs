use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct ContactForm {
    #[validate(min_length = 2)]
    #[validate(max_length = 200)]
    pub name: String,
    #[validate(pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$")]
    pub email: String,
    #[validate(min_length = 10)]
    #[validate(max_length = 5000)]
    pub message: String,
}

impl From<ContactForm> for models::ContactMessage {
    fn from(form: ContactForm) -> Self {
        models::ContactMessage {
            name: form.name,
            email: form.email,
            message: form.message,
        }
    }
}
