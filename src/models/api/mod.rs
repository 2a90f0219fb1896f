// src/models/api/mod.rs

pub mod response;

pub use response::{ErrorResponse, HealthResponse};
