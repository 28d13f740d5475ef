// src/core/models/mod.rs

pub mod vehicle;
pub mod rate;
pub mod receipt;

pub use vehicle::*;
pub use rate::*;
pub use receipt::*;
