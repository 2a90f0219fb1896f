use anyhow::Context;
use calendar_ui::{
    api,
    config::Config,
    db::{AppointmentStore, InMemoryAppointmentStore, PgAppointmentStore},
    models::AppState,
    utils::init_logging,
};
use log::{info, warn};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to read configuration")?;
    init_logging();

    let store: Arc<dyn AppointmentStore> = match &config.database_url {
        Some(url) => {
            let store = PgAppointmentStore::connect(url, config.max_connections)
                .await
                .context("failed to connect to the appointment database")?;
            store
                .migrate()
                .await
                .context("failed to apply database migrations")?;
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL is not set, appointments are kept in memory");
            Arc::new(InMemoryAppointmentStore::new())
        }
    };

    let shared_state = Arc::new(AppState::new(store));
    let app = api::app(shared_state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("🚀 Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
