// src/db/mod.rs

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAppointmentStore;
pub use postgres::PgAppointmentStore;

use crate::error::StoreError;
use crate::models::{Appointment, NewAppointment};
use async_trait::async_trait;
use uuid::Uuid;

/// Durable home of appointment records.
///
/// Implementations hand out independent copies; nothing returned keeps a
/// reference back into the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Appointment>, StoreError>;

    /// `month` is already known to be within 1..=12.
    async fn list_by_month(&self, month: u32) -> Result<Vec<Appointment>, StoreError>;

    /// Persists a new record under a freshly generated id.
    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment, StoreError>;

    /// Overwrites the stored record with the same id.
    async fn update(&self, appointment: &Appointment) -> Result<Appointment, StoreError>;
}
