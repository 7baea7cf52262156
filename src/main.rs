use ops_status_server::{config::Config, logging, server};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config =
        Config::from_env().map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    logging::init(config.log_format);

    server::run(config).await
}
