use actix_cors::Cors;
use actix_web::{
    middleware::{Compress, Logger, NormalizePath},
    web, App, HttpServer,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod api;
mod config;
mod error;
mod models;
mod seed;
mod state;
mod store;

use config::Config;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string())
        .parse()
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Mergington High School activities API");

    let config = Config::from_env().map_err(anyhow::Error::msg)?;
    info!("Configuration loaded");

    let state = AppState::from_config(config.clone())?;
    info!(
        "Loaded {} activities ({})",
        state.activities.count().await,
        match &config.activities_seed_path {
            Some(path) => path.display().to_string(),
            None => "built-in seed".to_string(),
        }
    );
    let state = web::Data::new(state);

    let bind_addr = config.bind_addr();
    let cors_allow_origin = config.cors_allow_origin.clone();

    info!("Server running at http://{}", bind_addr);

    HttpServer::new(move || {
        let cors = if cors_allow_origin == "*" {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600)
        } else {
            let mut cors = Cors::default();
            for origin in cors_allow_origin.split(',').map(|s| s.trim()) {
                cors = cors.allowed_origin(origin);
            }
            cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allow_any_header()
                .max_age(3600)
        };

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .configure(api::configure_routes)
            .configure(|cfg| api::configure_static(cfg, &config))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
