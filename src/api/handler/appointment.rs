use crate::error::AppointmentError;
use crate::models::{AppState, Appointment, CreateAppointmentInput, UpdateAppointmentInput};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_appointments_handler(
    State(state): State<Arc<AppState>>,
    Path(month): Path<i32>,
) -> Result<Json<Vec<Appointment>>, AppointmentError> {
    let appointments = state.queries.list_by_month(month).await?;
    debug!("Listing {} appointments for month {}", appointments.len(), month);
    Ok(Json(appointments))
}

/// Unknown ids answer with `null` rather than an error.
pub async fn get_appointment_detail_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Appointment>>, AppointmentError> {
    let appointment = state.queries.get_by_id(id).await?;
    Ok(Json(appointment))
}

pub async fn create_appointment_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAppointmentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), AppointmentError> {
    let Json(payload) = payload?;
    let created = state.commands.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_appointment_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateAppointmentInput>, JsonRejection>,
) -> Result<Json<Appointment>, AppointmentError> {
    let Json(payload) = payload?;
    let updated = state.commands.update(payload).await?;
    Ok(Json(updated))
}
