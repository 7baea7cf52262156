use actix_web::{get, web, HttpRequest, HttpResponse};
use tracing::{debug, warn};

use crate::{
    error::ApiError,
    models::incident::IncidentsResponse,
    store::IncidentStore,
};

#[get("/incidents")]
pub async fn get_incidents(store: web::Data<dyn IncidentStore>) -> Result<HttpResponse, ApiError> {
    let incidents = store.list().await?;
    debug!(count = incidents.len(), "listing incidents");

    Ok(HttpResponse::Ok().json(IncidentsResponse { incidents }))
}
#[get("/incidents/{incident_id}")]
pub async fn get_incident(
    incident_id: web::Path<String>,
    store: web::Data<dyn IncidentStore>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let incident_id = incident_id.into_inner();
    let id: i64 = match incident_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return Err(ApiError::InvalidId {
                value: incident_id,
                instance: req.path().to_string(),
            })
        }
    };

    match store.find_by_id(id).await? {
        Some(incident) => Ok(HttpResponse::Ok().json(incident)),
        None => {
            warn!(id, "incident not found");
            Err(ApiError::NotFound {
                id,
                instance: req.path().to_string(),
            })
        }
    }
}
