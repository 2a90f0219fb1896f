pub mod appointment_service;

pub use appointment_service::{
    AppointmentCommandService, AppointmentMapper, AppointmentQueryService, AppointmentValidator,
    DefaultAppointmentValidator,
};
