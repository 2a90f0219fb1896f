// src/models/mod.rs

pub mod api;
pub mod app;
pub mod appointments;
pub mod calendar;

pub use api::{ErrorResponse, HealthResponse};
pub use app::AppState;
pub use appointments::{
    Appointment, AppointmentDraft, CreateAppointmentInput, NewAppointment, UpdateAppointmentInput,
};
pub use calendar::{month_labels, MonthLabel};
