use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar entry. `start_time` always precedes `end_time` once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl Appointment {
    /// Month (1-12) the appointment falls in, taken from its start time.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }
}

/// Validated create payload handed to the store, which assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

// Missing fields deserialize to empty values so the validator can report them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateAppointmentInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "wire_time::deserialize")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "wire_time::deserialize")]
    pub end_time: Option<NaiveDateTime>,
}

/// Partial update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateAppointmentInput {
    pub id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire_time::deserialize")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "wire_time::deserialize")]
    pub end_time: Option<NaiveDateTime>,
}

impl UpdateAppointmentInput {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            title: None,
            description: None,
            start_time: None,
            end_time: None,
        }
    }
}

/// ISO-8601 local date-times, with or without seconds
/// (`2024-03-05T09:00:00.5`, `2024-03-05T09:00:00`, `2024-03-05T09:00`).
pub mod wire_time {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        raw.parse::<NaiveDateTime>()
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|value| {
            parse(&value)
                .map_err(|e| de::Error::custom(format!("invalid date-time {:?}: {}", value, e)))
        })
        .transpose()
    }
}

/// Candidate field set inspected by the validator before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub title: String,
    pub description: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}
