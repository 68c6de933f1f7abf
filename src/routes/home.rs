use crate::connectors::CatalogSource;
use crate::helpers::JsonResponse;
use crate::models::Category;
use crate::services::blog::{latest_posts, DEFAULT_LATEST_LIMIT};
use crate::services::catalog_query;
use crate::views::Home;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// Landing page content: featured templates and the latest posts.
#[tracing::instrument(name = "Home page", skip(catalog))]
#[get("/home")]
pub async fn home_handler(catalog: web::Data<Arc<dyn CatalogSource>>) -> Result<impl Responder> {
    let templates = catalog.templates().await?;
    let posts = catalog.blog_posts().await?;

    let home = Home {
        featured: catalog_query::featured(&templates).into_iter().cloned().collect(),
        latest_posts: latest_posts(&posts, DEFAULT_LATEST_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
        categories: Category::ALL.to_vec(),
    };
    Ok(JsonResponse::build().set_item(home).ok("OK"))
}
