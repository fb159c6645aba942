pub mod config;
pub mod error;
pub mod hazards;
pub mod telemetry;
