use crate::connectors::CatalogSource;
use crate::forms::BlogListQuery;
use crate::helpers::JsonResponse;
use crate::models::BlogPost;
use crate::services::blog::{latest_posts, DEFAULT_LATEST_LIMIT};
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "List latest blog posts", skip(catalog))]
#[get("")]
pub async fn list_handler(
    query: web::Query<BlogListQuery>,
    catalog: web::Data<Arc<dyn CatalogSource>>,
) -> Result<impl Responder> {
    let posts = catalog.blog_posts().await?;
    let limit = query.limit.unwrap_or(DEFAULT_LATEST_LIMIT);

    let latest = latest_posts(&posts, limit)
        .into_iter()
        .cloned()
        .collect::<Vec<BlogPost>>();
    Ok(JsonResponse::build().set_list(latest).ok("OK"))
}
