use actix_web::web;

pub mod incident;

/// Mounts the read-only incident API under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(incident::get_incidents)
            .service(incident::get_incident),
    );
}
