//! # polyfft-cli
//!
//! CLI output, result presentation, shell completion, and seeded random
//! polynomial generation for the demonstration driver.

pub mod completion;
pub mod generator;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, ResultPresenter, TrialResult};
