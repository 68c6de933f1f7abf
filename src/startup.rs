use crate::connectors::{CatalogSource, ContactConnector};
use crate::helpers::JsonResponse;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, middleware, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub fn run(
    listener: TcpListener,
    catalog: web::Data<Arc<dyn CatalogSource>>,
    contact: web::Data<Arc<dyn ContactConnector>>,
) -> Result<Server, std::io::Error> {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            other => other.to_string(),
        };
        JsonResponse::<()>::build().bad_request(message)
    });
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| JsonResponse::<()>::build().bad_request(err));
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| JsonResponse::<()>::build().bad_request(err));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/api")
                    .service(routes::home::home_handler)
                    .service(routes::templates::categories::list_handler)
                    .service(routes::contact::submit_handler)
                    .service(
                        web::scope("/templates")
                            .service(routes::templates::list_handler)
                            .service(routes::templates::detail_handler)
                            .service(routes::templates::use_handler),
                    )
                    .service(
                        web::scope("/pricing")
                            .service(routes::pricing::list_handler)
                            .service(routes::pricing::matrix_handler),
                    )
                    .service(web::scope("/blog").service(routes::blog::list_handler)),
            )
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(path_config.clone())
            .app_data(catalog.clone())
            .app_data(contact.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
