use crate::helpers::JsonResponse;
use crate::models::Category;
use actix_web::{get, Responder, Result};

#[tracing::instrument(name = "List categories")]
#[get("/categories")]
pub async fn list_handler() -> Result<impl Responder> {
    Ok(JsonResponse::build()
        .set_list(Category::ALL.to_vec())
        .ok("OK"))
}
