use super::AppointmentStore;
use crate::error::StoreError;
use crate::models::{Appointment, NewAppointment};
use async_trait::async_trait;
use log::{debug, info};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_COLUMNS: &str = "id, title, description, start_time, end_time";

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgAppointmentStore {
    pool: PgPool,
}

impl PgAppointmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        info!("Connected to appointment database");
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Appointment schema is up to date");
        Ok(())
    }

    async fn insert_with_id(
        &self,
        id: Uuid,
        appointment: NewAppointment,
    ) -> Result<Appointment, StoreError> {
        let query = format!(
            "INSERT INTO appointments (id, title, description, start_time, end_time) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            SELECT_COLUMNS
        );
        let stored = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(&appointment.title)
            .bind(&appointment.description)
            .bind(appointment.start_time)
            .bind(appointment.end_time)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    StoreError::Duplicate(id)
                }
                other => StoreError::Database(other),
            })?;

        debug!("Inserted appointment {}", stored.id);
        Ok(stored)
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Appointment>, StoreError> {
        let query = format!("SELECT {} FROM appointments WHERE id = $1", SELECT_COLUMNS);
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(appointment)
    }

    async fn list_by_month(&self, month: u32) -> Result<Vec<Appointment>, StoreError> {
        let query = format!(
            "SELECT {} FROM appointments \
             WHERE CAST(EXTRACT(MONTH FROM start_time) AS INTEGER) = $1 \
             ORDER BY start_time ASC",
            SELECT_COLUMNS
        );
        let appointments = sqlx::query_as::<_, Appointment>(&query)
            .bind(month as i32)
            .fetch_all(&self.pool)
            .await?;
        Ok(appointments)
    }

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment, StoreError> {
        self.insert_with_id(Uuid::new_v4(), appointment).await
    }

    async fn update(&self, appointment: &Appointment) -> Result<Appointment, StoreError> {
        let query = format!(
            "UPDATE appointments \
             SET title = $2, description = $3, start_time = $4, end_time = $5 \
             WHERE id = $1 RETURNING {}",
            SELECT_COLUMNS
        );
        let stored = sqlx::query_as::<_, Appointment>(&query)
            .bind(appointment.id)
            .bind(&appointment.title)
            .bind(&appointment.description)
            .bind(appointment.start_time)
            .bind(appointment.end_time)
            .fetch_optional(&self.pool)
            .await?;

        match stored {
            Some(stored) => {
                debug!("Updated appointment {}", stored.id);
                Ok(stored)
            }
            None => Err(StoreError::Missing(appointment.id)),
        }
    }
}
