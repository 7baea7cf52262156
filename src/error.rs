//! API errors, rendered as RFC 7807 problem details.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::store::StoreError;

pub const PROBLEM_JSON: &str = "application/problem+json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Problem {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode) -> Self {
        Self {
            kind: "about:blank".to_string(),
            title: status.canonical_reason().unwrap_or("Unknown").to_string(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no incident found with id {id}")]
    NotFound { id: i64, instance: String },

    #[error("invalid incident id {value:?}")]
    InvalidId { value: String, instance: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn problem(&self) -> Problem {
        let problem = Problem::new(self.status_code());
        match self {
            Self::NotFound { id, instance } => problem
                .with_detail(format!("No incident found with id {id}"))
                .with_instance(instance.as_str()),
            Self::InvalidId { value, instance } => problem
                .with_detail(format!("Incident id must be an integer, got '{value}'"))
                .with_instance(instance.as_str()),
            Self::Store(_) => problem,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidId { .. } => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        if let Self::Store(source) = self {
            error!(error = %source, "incident store failure");
        }

        HttpResponse::build(self.status_code())
            .content_type(PROBLEM_JSON)
            .json(self.problem())
    }
}
