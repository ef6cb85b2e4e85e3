//! CLI library components for the ED screener.

pub mod logging;
pub mod run_config;
