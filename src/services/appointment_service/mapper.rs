//! Field-by-field conversions between request payloads and the stored entity.
//!
//! Every function destructures its source without `..`, so a field added to an
//! input type fails to compile until it is given a destination here.
//!
//! Incoming times are cut to microseconds, the precision Postgres keeps, so
//! the validator judges the same values the store will hold.

use crate::error::ValidationError;
use chrono::{NaiveDateTime, SubsecRound};
use crate::models::{
    Appointment, AppointmentDraft, CreateAppointmentInput, NewAppointment, UpdateAppointmentInput,
};

const STORED_SUBSEC_DIGITS: u16 = 6;

fn stored_precision(time: NaiveDateTime) -> NaiveDateTime {
    time.trunc_subsecs(STORED_SUBSEC_DIGITS)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentMapper;

impl AppointmentMapper {
    pub fn draft_from_create(&self, input: CreateAppointmentInput) -> AppointmentDraft {
        let CreateAppointmentInput {
            title,
            description,
            start_time,
            end_time,
        } = input;

        AppointmentDraft {
            title,
            description,
            start_time: start_time.map(stored_precision),
            end_time: end_time.map(stored_precision),
        }
    }

    /// Expects a draft that already passed validation; missing times are
    /// still reported rather than assumed.
    pub fn new_appointment(&self, draft: AppointmentDraft) -> Result<NewAppointment, ValidationError> {
        let AppointmentDraft {
            title,
            description,
            start_time,
            end_time,
        } = draft;

        match (start_time, end_time) {
            (Some(start_time), Some(end_time)) => Ok(NewAppointment {
                title,
                description,
                start_time,
                end_time,
            }),
            (None, _) => Err(ValidationError::single("start_time", "is required")),
            (_, None) => Err(ValidationError::single("end_time", "is required")),
        }
    }

    /// What the appointment would look like after the update, without
    /// touching `existing`.
    pub fn merged_draft(
        &self,
        existing: &Appointment,
        input: &UpdateAppointmentInput,
    ) -> AppointmentDraft {
        let UpdateAppointmentInput {
            id: _,
            title,
            description,
            start_time,
            end_time,
        } = input;

        AppointmentDraft {
            title: title.clone().unwrap_or_else(|| existing.title.clone()),
            description: description
                .clone()
                .unwrap_or_else(|| existing.description.clone()),
            start_time: Some(start_time.map_or(existing.start_time, stored_precision)),
            end_time: Some(end_time.map_or(existing.end_time, stored_precision)),
        }
    }

    /// Overwrites only the fields the input carries. The id is never replaced.
    pub fn apply_update(&self, input: UpdateAppointmentInput, target: &mut Appointment) {
        let UpdateAppointmentInput {
            id: _,
            title,
            description,
            start_time,
            end_time,
        } = input;

        if let Some(title) = title {
            target.title = title;
        }
        if let Some(description) = description {
            target.description = description;
        }
        if let Some(start_time) = start_time {
            target.start_time = stored_precision(start_time);
        }
        if let Some(end_time) = end_time {
            target.end_time = stored_precision(end_time);
        }
    }
}
