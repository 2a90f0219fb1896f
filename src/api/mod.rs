// src/api/mod.rs

pub mod handler;
pub mod routes;

pub use routes::app;
