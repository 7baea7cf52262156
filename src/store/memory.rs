use std::{fs, path::Path};

use async_trait::async_trait;

use super::{IncidentStore, StoreError};
use crate::models::incident::Incident;

/// Fixed, ordered collection of incidents held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryIncidentStore {
    incidents: Vec<Incident>,
}

impl MemoryIncidentStore {
    pub fn new(incidents: Vec<Incident>) -> Self {
        Self { incidents }
    }
    /// Loads a JSON array of incidents.
    pub fn from_seed_file(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        let incidents: Vec<Incident> =
            serde_json::from_str(&raw).map_err(|source| StoreError::SeedFormat {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(incidents))
    }
    pub fn len(&self) -> usize {
        self.incidents.len()
    }
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }
}

#[async_trait]
impl IncidentStore for MemoryIncidentStore {
    async fn list(&self) -> Result<Vec<Incident>, StoreError> {
        Ok(self.incidents.clone())
    }
    async fn find_by_id(&self, id: i64) -> Result<Option<Incident>, StoreError> {
        Ok(self.incidents.iter().find(|incident| incident.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::incident::{IncidentOrigin, IncidentStatus};
    use chrono::NaiveDate;
    use std::io::Write;

    fn incident(id: i64, title: &str) -> Incident {
        Incident {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            happened_on: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            origin: IncidentOrigin::Issue,
            status: IncidentStatus::Resolved,
        }
    }

    #[actix_web::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryIncidentStore::new(vec![incident(3, "c"), incident(1, "a")]);
        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[actix_web::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let store = MemoryIncidentStore::new(vec![incident(1, "a")]);
        assert_eq!(store.find_by_id(1).await.unwrap(), Some(incident(1, "a")));
        assert_eq!(store.find_by_id(42).await.unwrap(), None);
    }

    #[test]
    fn seed_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":5,"title":"Outage","description":"API down","happenedOn":"2024-03-01","origin":"ISSUE","status":"SCHEDULED"}}]"#
        )
        .unwrap();

        let store = MemoryIncidentStore::from_seed_file(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.incidents[0].status, IncidentStatus::Scheduled);
    }

    #[test]
    fn malformed_seed_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let error = MemoryIncidentStore::from_seed_file(file.path()).unwrap_err();
        assert!(matches!(error, StoreError::SeedFormat { .. }));
    }

    #[test]
    fn missing_seed_file_is_reported() {
        let error =
            MemoryIncidentStore::from_seed_file(Path::new("/nonexistent/incidents.json"))
                .unwrap_err();
        assert!(matches!(error, StoreError::SeedIo { .. }));
    }
}
