use crate::connectors::CatalogSource;
use crate::forms::TemplateListQuery;
use crate::helpers::{JsonResponse, JsonResponseBuilder};
use crate::models::Template;
use crate::services::catalog_query::{self, RELATED_LIMIT};
use crate::services::{DetailEvent, DetailState};
use crate::views::{Listing, TemplateDetail, UpgradeNotice};
use actix_web::{get, post, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "List templates", skip(catalog))]
#[get("")]
pub async fn list_handler(
    query: web::Query<TemplateListQuery>,
    catalog: web::Data<Arc<dyn CatalogSource>>,
) -> Result<impl Responder> {
    let state = query
        .to_state()
        .map_err(|err| JsonResponse::<Listing>::build().bad_request(err))?;

    let templates = catalog.templates().await?;
    let shown = catalog_query::apply(&templates, &state.query())
        .into_iter()
        .cloned()
        .collect::<Vec<Template>>();

    let listing = Listing::new(templates.len(), shown, &state);
    Ok(JsonResponse::build().set_item(listing).ok("OK"))
}

#[tracing::instrument(name = "Get template by code name", skip(catalog))]
#[get("/{code_name}")]
pub async fn detail_handler(
    path: web::Path<(String,)>,
    catalog: web::Data<Arc<dyn CatalogSource>>,
) -> Result<impl Responder> {
    let code_name = path.into_inner().0;
    let templates = catalog.templates().await?;

    let template = catalog_query::find_by_code_name(&templates, &code_name)
        .ok_or_else(|| JsonResponse::<TemplateDetail>::build().not_found("Template not found"))?;

    let detail = TemplateDetail {
        template: template.clone(),
        related: catalog_query::related(&templates, template, RELATED_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
        upgrade: UpgradeNotice::for_tier(template.tier),
    };

    Ok(JsonResponse::build().set_item(detail).ok("OK"))
}

/// "Use this template". Paid templates answer 402 with the upgrade notice.
#[tracing::instrument(name = "Use template", skip(catalog))]
#[post("/{code_name}/use")]
pub async fn use_handler(
    path: web::Path<(String,)>,
    catalog: web::Data<Arc<dyn CatalogSource>>,
) -> Result<impl Responder> {
    let code_name = path.into_inner().0;
    let templates = catalog.templates().await?;

    let template = catalog_query::find_by_code_name(&templates, &code_name)
        .ok_or_else(|| JsonResponse::<Template>::build().not_found("Template not found"))?;

    let state = DetailState::new(template.tier).apply(DetailEvent::UseTemplate);
    if state.upgrade_modal_open {
        tracing::info!(template_id = %template.id, tier = %template.tier, "Upgrade required");
        let builder: JsonResponseBuilder<UpgradeNotice> = JsonResponse::build().set_id(&template.id);
        let builder = match UpgradeNotice::for_tier(template.tier) {
            Some(notice) => builder.set_item(notice),
            None => builder,
        };
        return Err(builder.payment_required("Upgrade Required"));
    }

    tracing::info!(template_id = %template.id, "Using free template");
    Ok(JsonResponse::build()
        .set_id(&template.id)
        .set_item(template.clone())
        .ok("Using free template"))
}
