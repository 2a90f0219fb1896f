use crate::db::AppointmentStore;
use crate::services::{
    AppointmentCommandService, AppointmentMapper, AppointmentQueryService,
    DefaultAppointmentValidator,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<AppointmentQueryService>,
    pub commands: Arc<AppointmentCommandService>,
}

impl AppState {
    /// Wires the query and command services over a single store.
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        let queries = Arc::new(AppointmentQueryService::new(store.clone()));
        let commands = Arc::new(AppointmentCommandService::new(
            store,
            queries.clone(),
            Arc::new(DefaultAppointmentValidator),
            AppointmentMapper,
        ));

        Self { queries, commands }
    }
}
