pub mod month;

pub use month::{month_labels, MonthLabel};
