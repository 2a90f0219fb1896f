use crate::models::ErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Field-level validation failures, keyed by field name.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("validation failed: {}", describe(.errors))]
pub struct ValidationError {
    pub errors: BTreeMap<String, String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, reason: &str) -> Self {
        let mut err = Self::new();
        err.add(field, reason);
        err
    }

    /// Records a failure; the first reason reported for a field wins.
    pub fn add(&mut self, field: &str, reason: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| reason.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn describe(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, reason)| format!("{}: {}", field, reason))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("appointment {0} is no longer stored")]
    Missing(Uuid),

    #[error("appointment {0} already exists")]
    Duplicate(Uuid),
}

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No appointment found with the id {0}")]
    NotFound(Uuid),

    #[error("appointment store failure: {0}")]
    Store(#[from] StoreError),

    #[error("invalid request body: {0}")]
    InvalidPayload(String),
}

// Unreadable bodies answer with the same 400 JSON shape as validation failures.
impl From<JsonRejection> for AppointmentError {
    fn from(rejection: JsonRejection) -> Self {
        AppointmentError::InvalidPayload(rejection.body_text())
    }
}

impl IntoResponse for AppointmentError {
    fn into_response(self) -> Response {
        let body = match self {
            AppointmentError::Validation(err) => {
                warn!("Rejected appointment payload: {}", err);
                ErrorResponse {
                    message: err.to_string(),
                    errors: Some(err.errors),
                }
            }
            AppointmentError::NotFound(id) => {
                warn!("Update for unknown appointment {}", id);
                ErrorResponse::message(format!("No appointment found with the id {}", id))
            }
            AppointmentError::Store(err) => {
                error!("Appointment store failure: {}", err);
                ErrorResponse::message("Appointment store failure".to_string())
            }
            AppointmentError::InvalidPayload(reason) => {
                warn!("Unreadable appointment payload: {}", reason);
                ErrorResponse::message(reason)
            }
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
