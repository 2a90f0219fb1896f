use super::AppointmentStore;
use crate::error::StoreError;
use crate::models::{Appointment, NewAppointment};
use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store for local runs and tests.
#[derive(Clone, Default)]
pub struct InMemoryAppointmentStore {
    appointments: Arc<RwLock<HashMap<Uuid, Appointment>>>,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.appointments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.appointments.read().await.is_empty()
    }
}

#[async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Appointment>, StoreError> {
        let appointments = self.appointments.read().await;
        Ok(appointments.get(&id).cloned())
    }

    async fn list_by_month(&self, month: u32) -> Result<Vec<Appointment>, StoreError> {
        let appointments = self.appointments.read().await;
        let mut found: Vec<Appointment> = appointments
            .values()
            .filter(|a| a.month() == month)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.start_time);
        Ok(found)
    }

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment, StoreError> {
        let id = Uuid::new_v4();
        let mut appointments = self.appointments.write().await;

        let NewAppointment {
            title,
            description,
            start_time,
            end_time,
        } = appointment;
        let stored = Appointment {
            id,
            title,
            description,
            start_time,
            end_time,
        };
        appointments.insert(id, stored.clone());

        debug!("Created appointment: {} with id {}", stored.title, id);
        Ok(stored)
    }

    async fn update(&self, appointment: &Appointment) -> Result<Appointment, StoreError> {
        let mut appointments = self.appointments.write().await;
        match appointments.get_mut(&appointment.id) {
            Some(stored) => {
                *stored = appointment.clone();
                debug!("Updated appointment {}", appointment.id);
                Ok(stored.clone())
            }
            None => Err(StoreError::Missing(appointment.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn new_appointment(title: &str, start: NaiveDateTime) -> NewAppointment {
        NewAppointment {
            title: title.to_string(),
            description: String::new(),
            start_time: start,
            end_time: start + chrono::Duration::hours(1),
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryAppointmentStore::new();
        let a = store.insert(new_appointment("a", at(2024, 3, 5, 9))).await.unwrap();
        let b = store.insert(new_appointment("b", at(2024, 3, 5, 9))).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn list_by_month_spans_years_and_sorts() {
        let store = InMemoryAppointmentStore::new();
        store.insert(new_appointment("late", at(2024, 3, 20, 9))).await.unwrap();
        store.insert(new_appointment("april", at(2024, 4, 1, 9))).await.unwrap();
        store.insert(new_appointment("early", at(2023, 3, 1, 9))).await.unwrap();

        let titles: Vec<String> = store
            .list_by_month(3)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();

        assert_eq!(titles, vec!["early", "late"]);
    }

    #[tokio::test]
    async fn update_of_unknown_record_is_missing() {
        let store = InMemoryAppointmentStore::new();
        let ghost = Appointment {
            id: Uuid::new_v4(),
            title: "ghost".to_string(),
            description: String::new(),
            start_time: at(2024, 1, 1, 9),
            end_time: at(2024, 1, 1, 10),
        };

        let result = store.update(&ghost).await;

        assert!(matches!(result, Err(StoreError::Missing(id)) if id == ghost.id));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn returned_copies_are_detached() {
        let store = InMemoryAppointmentStore::new();
        let mut created = store.insert(new_appointment("a", at(2024, 3, 5, 9))).await.unwrap();
        created.title = "changed locally".to_string();

        let stored = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "a");
    }
}
