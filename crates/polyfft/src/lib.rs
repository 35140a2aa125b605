//! polyfft library: application logic for the demonstration driver.

pub mod app;
pub mod config;
pub mod errors;
