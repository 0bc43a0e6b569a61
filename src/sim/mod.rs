pub mod metrics;
pub mod runner;

pub use metrics::settling_time;
pub use runner::{SimConfig, Simulation};
