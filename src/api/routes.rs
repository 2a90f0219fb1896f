use super::handler::{
    calendar_handler, create_appointment_handler, get_appointment_detail_handler,
    get_appointments_handler, health_handler, update_appointment_handler,
};
use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/calendar", get(calendar_handler))
        .route("/appointments/{month}", get(get_appointments_handler))
        .route("/appointmentdetail/{id}", get(get_appointment_detail_handler))
        .route("/calendar/createappointment", post(create_appointment_handler))
        .route("/calendar/updateappointment", post(update_appointment_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
