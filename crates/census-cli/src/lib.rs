//! CLI library components for the census profiler.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
