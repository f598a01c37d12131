// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/index.html", web::get().to(handlers::index))
        .route("/submit", web::post().to(handlers::submit))
        .route("/expression.html", web::get().to(handlers::expression_page))
        .service(
            web::scope("/fragments")
                .route("/expressions", web::get().to(handlers::list_fragment))
                .route("/expression", web::get().to(handlers::detail_fragment)),
        )
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(handlers::health_check)),
        )
        .route("/{_:.*}", web::get().to(handlers::static_file_handler));
}
