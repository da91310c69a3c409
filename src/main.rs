use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use crate::config::{AllowedOrigins, Config};
use crate::services::stripe_client::{PaymentProvider, StripeClient};

mod api;
mod config;
mod errors;
mod models;
mod services;

fn build_cors(origins: &AllowedOrigins) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();

    match origins {
        AllowedOrigins::Any => cors.allow_any_origin(),
        AllowedOrigins::List(list) => list
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let provider: Arc<dyn PaymentProvider> = Arc::new(StripeClient::new(
        &config.stripe_api_base,
        config.stripe_secret_key.clone(),
    ));
    let provider = web::Data::from(provider);
    let origins = config.allowed_origins.clone();

    log::info!(
        "listening on {}:{} (cors: {:?})",
        config.host,
        config.port,
        origins
    );

    HttpServer::new(move || {
        App::new()
            .app_data(provider.clone())
            .configure(api::config)
            .wrap(build_cors(&origins))
            .wrap(Logger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
