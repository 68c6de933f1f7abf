use crate::connectors::CatalogSource;
use crate::helpers::JsonResponse;
use crate::services::build_matrix;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "List pricing tiers", skip(catalog))]
#[get("")]
pub async fn list_handler(catalog: web::Data<Arc<dyn CatalogSource>>) -> Result<impl Responder> {
    let tiers = catalog.pricing_tiers().await?;
    Ok(JsonResponse::build().set_list(tiers).ok("OK"))
}

#[tracing::instrument(name = "Build feature matrix", skip(catalog))]
#[get("/matrix")]
pub async fn matrix_handler(catalog: web::Data<Arc<dyn CatalogSource>>) -> Result<impl Responder> {
    let tiers = catalog.pricing_tiers().await?;
    let features = catalog.canonical_features().await?;

    let matrix = build_matrix(&tiers, &features);
    Ok(JsonResponse::build().set_item(matrix).ok("OK"))
}
