pub mod common;
pub mod config;
pub mod dashboard;
pub mod ring;
