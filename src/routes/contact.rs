use crate::connectors::ContactConnector;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Submit contact form", skip(form, contact), fields(email = %form.email))]
#[post("/contact")]
pub async fn submit_handler(
    form: web::Json<forms::ContactForm>,
    contact: web::Data<Arc<dyn ContactConnector>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::ContactReceipt>::build().form_error(errors.to_string()));
    }

    let message: models::ContactMessage = form.into_inner().into();
    contact
        .submit(&message)
        .await
        .map(|receipt| {
            JsonResponse::build()
                .set_id(receipt.id)
                .set_item(receipt)
                .ok("Message sent! Thanks for reaching out. We'll get back to you soon.")
        })
        .map_err(|err| {
            tracing::error!("Failed to submit contact message: {:?}", err);
            JsonResponse::<models::ContactReceipt>::build()
                .service_unavailable("Something went wrong. Please try again.")
        })
}
