pub mod availability;
pub mod common;
pub mod config;
pub mod engagements;
pub mod validate;
