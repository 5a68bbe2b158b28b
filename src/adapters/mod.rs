//! Concrete port implementations.

pub mod csv_adapter;
pub mod file_config_adapter;
pub mod console_progress;
