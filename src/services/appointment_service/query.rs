use crate::db::AppointmentStore;
use crate::error::StoreError;
use crate::models::Appointment;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

/// Read side. Absence is never an error: unknown ids give `None`, empty or
/// out-of-range months give an empty list.
#[derive(Clone)]
pub struct AppointmentQueryService {
    store: Arc<dyn AppointmentStore>,
}

impl AppointmentQueryService {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    /// Appointments whose start time falls in `month`, in any year, earliest first.
    pub async fn list_by_month(&self, month: i32) -> Result<Vec<Appointment>, StoreError> {
        let month = match u32::try_from(month) {
            Ok(m) if (1..=12).contains(&m) => m,
            _ => {
                debug!("Month {} is out of range, returning no appointments", month);
                return Ok(Vec::new());
            }
        };

        let mut appointments = self.store.list_by_month(month).await?;
        appointments.sort_by_key(|a| a.start_time);
        Ok(appointments)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Appointment>, StoreError> {
        self.store.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{InMemoryAppointmentStore, MockAppointmentStore};
    use crate::models::NewAppointment;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    async fn seed(store: &InMemoryAppointmentStore, title: &str, start: NaiveDateTime) -> Appointment {
        store
            .insert(NewAppointment {
                title: title.to_string(),
                description: String::new(),
                start_time: start,
                end_time: start + chrono::Duration::minutes(30),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn empty_store_gives_empty_month() {
        let queries = AppointmentQueryService::new(Arc::new(InMemoryAppointmentStore::new()));
        assert!(queries.list_by_month(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_month_never_reaches_store() {
        let mut store = MockAppointmentStore::new();
        store.expect_list_by_month().never();
        let queries = AppointmentQueryService::new(Arc::new(store));

        for month in [0, 13, -1, i32::MAX, i32::MIN] {
            assert!(queries.list_by_month(month).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn month_listing_is_filtered_and_ordered() {
        let store = InMemoryAppointmentStore::new();
        seed(&store, "afternoon", at(3, 5, 14)).await;
        seed(&store, "other month", at(4, 5, 9)).await;
        seed(&store, "morning", at(3, 5, 9)).await;
        seed(&store, "first", at(3, 1, 9)).await;
        let queries = AppointmentQueryService::new(Arc::new(store));

        for month in 1..=12 {
            let listed = queries.list_by_month(month).await.unwrap();
            assert!(listed.iter().all(|a| a.month() == month as u32));
            assert!(listed.windows(2).all(|w| w[0].start_time <= w[1].start_time));
        }

        let titles: Vec<String> = queries
            .list_by_month(3)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["first", "morning", "afternoon"]);
    }

    #[tokio::test]
    async fn store_order_is_not_trusted() {
        let early = Appointment {
            id: Uuid::new_v4(),
            title: "early".to_string(),
            description: String::new(),
            start_time: at(3, 1, 9),
            end_time: at(3, 1, 10),
        };
        let late = Appointment {
            id: Uuid::new_v4(),
            title: "late".to_string(),
            start_time: at(3, 2, 9),
            end_time: at(3, 2, 10),
            ..early.clone()
        };
        let unsorted = vec![late.clone(), early.clone()];

        let mut store = MockAppointmentStore::new();
        store
            .expect_list_by_month()
            .withf(|month| *month == 3)
            .returning(move |_| Ok(unsorted.clone()));
        let queries = AppointmentQueryService::new(Arc::new(store));

        assert_eq!(queries.list_by_month(3).await.unwrap(), vec![early, late]);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let store = InMemoryAppointmentStore::new();
        seed(&store, "known", at(3, 5, 9)).await;
        let queries = AppointmentQueryService::new(Arc::new(store));

        assert!(queries.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
