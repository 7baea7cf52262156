use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentOrigin {
    Maintenance,
    Issue,
}
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    Scheduled,
    InProgress,
    Resolved,
}

/// A recorded maintenance or issue event, as exposed by the API.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub happened_on: NaiveDate,
    pub origin: IncidentOrigin,
    pub status: IncidentStatus,
}
/// Stored shape of an incident: the identifier lives in `_id`.
#[derive(Debug, Deserialize, Serialize)]
pub struct IncidentDocument {
    pub _id: i64,
    pub title: String,
    pub description: String,
    pub happened_on: NaiveDate,
    pub origin: IncidentOrigin,
    pub status: IncidentStatus,
}
#[derive(Debug, Deserialize, Serialize)]
pub struct IncidentsResponse {
    pub incidents: Vec<Incident>,
}

impl From<IncidentDocument> for Incident {
    fn from(document: IncidentDocument) -> Self {
        Self {
            id: document._id,
            title: document.title,
            description: document.description,
            happened_on: document.happened_on,
            origin: document.origin,
            status: document.status,
        }
    }
}
impl From<&Incident> for IncidentDocument {
    fn from(incident: &Incident) -> Self {
        Self {
            _id: incident.id,
            title: incident.title.clone(),
            description: incident.description.clone(),
            happened_on: incident.happened_on,
            origin: incident.origin,
            status: incident.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn incident() -> Incident {
        Incident {
            id: 7,
            title: "Database upgrade".to_string(),
            description: "Planned upgrade of the primary cluster".to_string(),
            happened_on: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            origin: IncidentOrigin::Maintenance,
            status: IncidentStatus::InProgress,
        }
    }

    #[test]
    fn incident_serializes_with_iso_date_and_enum_names() {
        let value = serde_json::to_value(incident()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "title": "Database upgrade",
                "description": "Planned upgrade of the primary cluster",
                "happenedOn": "2024-01-02",
                "origin": "MAINTENANCE",
                "status": "IN_PROGRESS",
            })
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = serde_json::from_value::<Incident>(json!({
            "id": 1,
            "title": "t",
            "description": "d",
            "happenedOn": "2024-01-02",
            "origin": "ISSUE",
            "status": "ON_FIRE",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn document_keeps_identifier_in_underscore_id() {
        let document = IncidentDocument::from(&incident());
        assert_eq!(document._id, 7);
        assert_eq!(Incident::from(document), incident());
    }
}
