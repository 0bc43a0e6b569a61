use super::controller::Controller;

// ---------------------------------------------------------------------------
// PID controller (single axis, internal setpoint)
// ---------------------------------------------------------------------------

/// Three-term feedback law tracking an internal setpoint.
///
/// Known limitations of this deliberately minimal law:
/// - The integral accumulates without clamping; there is no anti-windup
///   protection, so a long-saturated actuator will wind the I-term up.
/// - The derivative is the raw backward difference of the error, unfiltered
///   and computed on the error (not the measurement), so a setpoint change
///   produces a derivative kick. On the first call after construction or
///   [`reset`](Pid::reset) the previous error is 0 and the derivative term
///   is `error / dt`, which is intentional and observable.
/// - `dt` must be nonzero; `dt == 0` divides by zero in the derivative
///   (caller contract, not guarded).
#[derive(Debug, Clone)]
pub struct Pid {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    pub setpoint: f64,
    integral: f64,
    prev_error: f64,
}

impl Pid {
    pub fn new(kp: f64, ki: f64, kd: f64, setpoint: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            setpoint,
            integral: 0.0,
            prev_error: 0.0,
        }
    }

    /// Compute the control output for the measured process variable.
    ///
    /// State (integral, previous error) is updated on every call regardless
    /// of which gains are nonzero.
    pub fn update(&mut self, process_variable: f64, dt: f64) -> f64 {
        let error = self.setpoint - process_variable;
        self.integral += error * dt;
        let derivative = (error - self.prev_error) / dt;
        self.prev_error = error;
        self.kp * error + self.ki * self.integral + self.kd * derivative
    }

    /// Zero the integral and previous error. Gains and setpoint persist.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
    }

    /// Accumulated integral of the error (units: error * s).
    pub fn integral(&self) -> f64 {
        self.integral
    }

    /// Error seen by the most recent [`update`](Pid::update) call.
    pub fn previous_error(&self) -> f64 {
        self.prev_error
    }
}

impl Controller for Pid {
    fn compute(&mut self, process_variable: f64, dt: f64) -> f64 {
        self.update(process_variable, dt)
    }

    fn set_setpoint(&mut self, setpoint: f64) {
        self.setpoint = setpoint;
    }

    fn setpoint(&self) -> f64 {
        self.setpoint
    }

    fn reset(&mut self) {
        Pid::reset(self);
    }

    fn name(&self) -> &str {
        "Pid"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
