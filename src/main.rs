use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use review_analyzer::api;
use review_analyzer::config::Config;
use review_analyzer::db::ReviewStore;
use review_analyzer::state::AppState;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> io::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().map_err(io::Error::other)?;

    // The service cannot answer reads without its log, so a bad log stops startup
    info!("Loading reviews from {}", config.reviews_path.display());
    let store = ReviewStore::open(&config.reviews_path, config.create_if_missing)
        .map_err(io::Error::other)?;
    let state = web::Data::new(AppState::with_vader(store));

    let addr = (config.host.clone(), config.port);
    info!("Listening on http://{}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await
}
