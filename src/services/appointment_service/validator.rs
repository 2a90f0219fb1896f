use crate::error::ValidationError;
use crate::models::AppointmentDraft;

/// Structural check run before any appointment reaches the store.
pub trait AppointmentValidator: Send + Sync {
    fn validate(&self, draft: &AppointmentDraft) -> Result<(), ValidationError>;
}

/// Title must carry text and the time range must be present and ordered.
/// Overlapping appointments are allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAppointmentValidator;

impl AppointmentValidator for DefaultAppointmentValidator {
    fn validate(&self, draft: &AppointmentDraft) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        if draft.title.trim().is_empty() {
            errors.add("title", "must not be empty");
        }
        if draft.start_time.is_none() {
            errors.add("start_time", "is required");
        }
        if draft.end_time.is_none() {
            errors.add("end_time", "is required");
        }
        if let (Some(start), Some(end)) = (draft.start_time, draft.end_time) {
            if start >= end {
                errors.add("end_time", "must be after start_time");
            }
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn draft(title: &str, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> AppointmentDraft {
        AppointmentDraft {
            title: title.to_string(),
            description: String::new(),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn accepts_well_formed_draft() {
        let result = DefaultAppointmentValidator.validate(&draft("Demo", Some(at(9)), Some(at(10))));
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let err = DefaultAppointmentValidator
            .validate(&draft("   ", Some(at(9)), Some(at(10))))
            .unwrap_err();

        assert!(err.has("title"));
        assert_eq!(err.errors.len(), 1);
    }

    #[test]
    fn rejects_missing_times() {
        let err = DefaultAppointmentValidator
            .validate(&draft("Demo", None, None))
            .unwrap_err();

        assert_eq!(err.errors["start_time"], "is required");
        assert_eq!(err.errors["end_time"], "is required");
    }

    #[test]
    fn end_must_follow_start() {
        for end in [at(9), at(8)] {
            let err = DefaultAppointmentValidator
                .validate(&draft("Demo", Some(at(9)), Some(end)))
                .unwrap_err();
            assert_eq!(err.errors["end_time"], "must be after start_time");
        }
    }

    #[test]
    fn collects_all_failures() {
        let err = DefaultAppointmentValidator
            .validate(&draft("", Some(at(10)), Some(at(9))))
            .unwrap_err();

        assert!(err.has("title"));
        assert!(err.has("end_time"));
    }
}
