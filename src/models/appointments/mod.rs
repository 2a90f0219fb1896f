// src/models/appointments/mod.rs

pub mod appointment;

pub use appointment::{
    Appointment, AppointmentDraft, CreateAppointmentInput, NewAppointment, UpdateAppointmentInput,
};
