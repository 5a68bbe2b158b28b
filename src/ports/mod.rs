//! Port traits at the domain boundary.

pub mod data_port;
pub mod progress_port;
pub mod config_port;
