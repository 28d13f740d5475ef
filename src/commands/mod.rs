pub mod common;
pub mod script;
