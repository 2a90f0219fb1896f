pub mod appointment;
pub mod calendar;
pub mod health;

pub use appointment::{
    create_appointment_handler, get_appointment_detail_handler, get_appointments_handler,
    update_appointment_handler,
};
pub use calendar::calendar_handler;
pub use health::health_handler;
