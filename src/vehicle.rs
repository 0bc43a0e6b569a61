use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Point-mass vehicle with quadratic drag (1D longitudinal dynamics)
// ---------------------------------------------------------------------------

/// Construction parameters for a [`Vehicle`], defaulting to the values of
/// the stock experiment: a 1 kg point mass starting at 10 m/s with
/// c = 0.05 kg/m.
#[derive(Debug, Clone, Copy)]
pub struct VehicleConfig {
    pub mass: f64,             // kg, must be > 0
    pub initial_velocity: f64, // m/s, sign = direction of travel
    pub drag_coefficient: f64, // kg/m, must be >= 0
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            initial_velocity: 10.0,
            drag_coefficient: 0.05,
        }
    }
}

/// A point mass on a line, subject to quadratic drag and an external force.
///
/// Drag model: f = -sign(v) * c * v^2, always opposing motion and exactly
/// zero at rest. Integration is forward Euler, so the per-step error grows
/// with dt and with the drag nonlinearity; a large enough dt can step a
/// decelerating vehicle straight past zero.
#[derive(Debug, Clone)]
pub struct Vehicle {
    mass: f64,
    velocity: f64,
    drag_coefficient: f64,
}

impl Vehicle {
    /// Build a vehicle, rejecting non-physical parameters.
    pub fn new(config: VehicleConfig) -> Result<Self, ConfigError> {
        if config.mass <= 0.0 || !config.mass.is_finite() {
            return Err(ConfigError::NonPositiveMass(config.mass));
        }
        if config.drag_coefficient < 0.0 || !config.drag_coefficient.is_finite() {
            return Err(ConfigError::NegativeDragCoefficient(config.drag_coefficient));
        }
        Ok(Self {
            mass: config.mass,
            velocity: config.initial_velocity,
            drag_coefficient: config.drag_coefficient,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    /// Drag force (N) at the current velocity: -sign(v) * c * v^2.
    ///
    /// Zero velocity yields exactly zero force. `f64::signum` maps 0.0 to
    /// 1.0, so the sign is taken with an explicit three-way branch.
    pub fn drag_force(&self) -> f64 {
        let v = self.velocity;
        let sign = if v > 0.0 {
            1.0
        } else if v < 0.0 {
            -1.0
        } else {
            0.0
        };
        -sign * self.drag_coefficient * v * v
    }

    /// Advance the vehicle one step of forward-Euler integration under
    /// drag plus `external_force` (N). Mutates and returns the new velocity.
    pub fn update(&mut self, external_force: f64, dt: f64) -> f64 {
        let total_force = self.drag_force() + external_force;
        let acceleration = total_force / self.mass;
        self.velocity += acceleration * dt;
        self.velocity
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
