//! 1D longitudinal vehicle dynamics under PID cruise control.
//!
//! Three pieces: a point-mass [`Vehicle`] with
//! quadratic drag, a [`Pid`] controller behind the pluggable [`Controller`]
//! trait, and a fixed-step [`Simulation`] loop that records time, velocity,
//! and control-input histories and derives a settling-time metric from them.
//! The library only produces data; rendering and reporting live in the
//! binaries.

pub mod control;
pub mod error;
pub mod sim;
pub mod vehicle;

pub use control::{Controller, Pid};
pub use error::ConfigError;
pub use sim::{SimConfig, Simulation};
pub use vehicle::{Vehicle, VehicleConfig};
