mod config;
mod error;
mod services;
mod state;
mod upstream;

use crate::config::Config;
use crate::state::AppState;
use crate::upstream::MockApiClient;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(io::Error::other)?;
    let upstream = MockApiClient::new(&config).map_err(io::Error::other)?;
    let address = config.bind_address();

    info!("Proxying food items to {}", upstream.base_url());
    let state = AppState::new(config, Arc::new(upstream));

    info!("Server running at http://{}", address);

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| services::configure_app(cfg, state))
            .default_service(web::route().to(services::not_found))
    })
        .bind(address)?
        .run()
        .await
}
