use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::info;

use crate::{config::Config, routes, store};

pub fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(3600);

    if origins.is_empty() {
        return cors.allow_any_origin();
    }
    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

pub async fn run(config: Config) -> io::Result<()> {
    let store = store::open(&config)
        .await
        .map_err(|error| io::Error::new(io::ErrorKind::Other, error))?;
    let store = web::Data::from(store);
    let origins = config.cors_origins.clone();

    info!(host = %config.host, port = config.port, "starting ops-status server");

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&origins))
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
