// src/core/mod.rs

pub mod models;
pub mod state;
pub mod parking_system;
pub mod reporting;
