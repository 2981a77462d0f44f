//! Configuration management for the reduction solver

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputFormat, SearchConfig, Settings};
