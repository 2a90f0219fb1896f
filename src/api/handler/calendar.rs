use crate::models::{month_labels, MonthLabel};
use axum::Json;

pub async fn calendar_handler() -> Json<Vec<MonthLabel>> {
    Json(month_labels())
}
