pub mod handlers;

use actix_files::Files;
use actix_web::{error::QueryPayloadError, web, HttpRequest};

use crate::config::Config;
use crate::error::AppError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .service(web::resource("/").route(web::get().to(handlers::root)))
        .service(web::resource("/health").route(web::get().to(handlers::health_check)))
        .service(web::resource("/activities").route(web::get().to(handlers::get_activities)))
        .service(
            web::resource("/activities/{activity_name}")
                .route(web::get().to(handlers::get_activity)),
        )
        .service(
            web::resource("/activities/{activity_name}/signup")
                .route(web::post().to(handlers::signup_for_activity)),
        );
}

/// Mounts the browser page under `/static`.
pub fn configure_static(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(Files::new("/static", config.static_dir.clone()).index_file("index.html"));
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(format!("Invalid query: {}", err)).into()
}
