// src/services/appointment_service/mod.rs

pub mod command;
pub mod mapper;
pub mod query;
pub mod validator;

pub use command::AppointmentCommandService;
pub use mapper::AppointmentMapper;
pub use query::AppointmentQueryService;
pub use validator::{AppointmentValidator, DefaultAppointmentValidator};
