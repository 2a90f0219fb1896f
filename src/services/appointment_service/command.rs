use super::mapper::AppointmentMapper;
use super::query::AppointmentQueryService;
use super::validator::AppointmentValidator;
use crate::db::AppointmentStore;
use crate::error::AppointmentError;
use crate::models::{Appointment, CreateAppointmentInput, UpdateAppointmentInput};
use log::info;
use std::sync::Arc;

/// Write side. The store call is always the last step, so a rejected
/// request leaves nothing behind.
///
/// Updates are load-merge-write without a version check; two concurrent
/// updates of the same appointment resolve as last writer wins.
#[derive(Clone)]
pub struct AppointmentCommandService {
    store: Arc<dyn AppointmentStore>,
    queries: Arc<AppointmentQueryService>,
    validator: Arc<dyn AppointmentValidator>,
    mapper: AppointmentMapper,
}

impl AppointmentCommandService {
    pub fn new(
        store: Arc<dyn AppointmentStore>,
        queries: Arc<AppointmentQueryService>,
        validator: Arc<dyn AppointmentValidator>,
        mapper: AppointmentMapper,
    ) -> Self {
        Self {
            store,
            queries,
            validator,
            mapper,
        }
    }

    pub async fn create(&self, input: CreateAppointmentInput) -> Result<Appointment, AppointmentError> {
        let draft = self.mapper.draft_from_create(input);
        self.validator.validate(&draft)?;

        let new_appointment = self.mapper.new_appointment(draft)?;
        let created = self.store.insert(new_appointment).await?;

        info!("Created appointment {} ({})", created.id, created.title);
        Ok(created)
    }

    pub async fn update(&self, input: UpdateAppointmentInput) -> Result<Appointment, AppointmentError> {
        let mut appointment = self
            .queries
            .get_by_id(input.id)
            .await?
            .ok_or(AppointmentError::NotFound(input.id))?;

        let draft = self.mapper.merged_draft(&appointment, &input);
        self.validator.validate(&draft)?;

        self.mapper.apply_update(input, &mut appointment);
        let updated = self.store.update(&appointment).await?;

        info!("Updated appointment {}", updated.id);
        Ok(updated)
    }
}
