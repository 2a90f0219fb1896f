use chrono::Month;
use serde::{Deserialize, Serialize};

/// Entry of the month selector; generated, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabel {
    pub id: u8,
    pub name: String,
}

pub fn month_labels() -> Vec<MonthLabel> {
    (1..=12u8)
        .filter_map(|id| Month::try_from(id).ok().map(|month| (id, month)))
        .map(|(id, month)| MonthLabel {
            id,
            name: month.name()[..3].to_string(),
        })
        .collect()
}
