use thiserror::Error;

/// Rejected construction parameters.
///
/// Validation happens once, at construction. The per-step operations
/// (`update`, `compute`) stay unchecked; their preconditions are caller
/// contracts documented on the methods.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("vehicle mass must be positive and finite, got {0}")]
    NonPositiveMass(f64),

    #[error("drag coefficient must be non-negative and finite, got {0}")]
    NegativeDragCoefficient(f64),

    #[error("time step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f64),
}
