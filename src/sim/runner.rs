use crate::control::Controller;
use crate::error::ConfigError;
use crate::vehicle::Vehicle;

use super::metrics;

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub dt: f64, // s, must be > 0
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { dt: 1.0 } // 1 Hz, the default experiment's step
    }
}

// ---------------------------------------------------------------------------
// Fixed-step simulation loop
// ---------------------------------------------------------------------------

/// Drives one [`Vehicle`] and at most one [`Controller`] over discrete time
/// steps, recording three index-aligned histories: time, velocity (the
/// process variable), and control input.
///
/// Each step records the current state first, then asks the controller for a
/// force from the just-recorded velocity, records that force, and finally
/// advances the plant: `velocity()[i]` is the state the controller saw when
/// producing `control_input()[i]`.
pub struct Simulation {
    vehicle: Vehicle,
    controller: Option<Box<dyn Controller>>,
    dt: f64,
    time: Vec<f64>,
    velocity: Vec<f64>,
    control_input: Vec<f64>,
}

// Manual impl: `dyn Controller` is not `Debug`, so the controller is shown
// by its `name()`.
impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("vehicle", &self.vehicle)
            .field("controller", &self.controller.as_deref().map(Controller::name))
            .field("dt", &self.dt)
            .field("time", &self.time)
            .field("velocity", &self.velocity)
            .field("control_input", &self.control_input)
            .finish()
    }
}

impl Simulation {
    /// Build an uncontrolled simulation. The plant coasts under drag alone
    /// until a controller is attached.
    pub fn new(vehicle: Vehicle, config: SimConfig) -> Result<Self, ConfigError> {
        if config.dt <= 0.0 || !config.dt.is_finite() {
            return Err(ConfigError::NonPositiveTimeStep(config.dt));
        }
        Ok(Self {
            vehicle,
            controller: None,
            dt: config.dt,
            time: Vec::new(),
            velocity: Vec::new(),
            control_input: Vec::new(),
        })
    }

    /// Attach a feedback controller to close the loop.
    pub fn with_controller(mut self, controller: Box<dyn Controller>) -> Self {
        self.controller = Some(controller);
        self
    }

    /// Run for `duration` seconds, overwriting any previously recorded
    /// histories.
    ///
    /// If `setpoint` is given and a controller is attached, the controller
    /// retargets and resets first, so no integral state carries over from a
    /// prior run at a different target. The loop condition is
    /// `t <= duration`, inclusive of t = 0; when duration is an exact
    /// multiple of dt this records `duration/dt + 1` samples (the endpoint
    /// sample is kept: a 100 s run at dt = 1 records 101 samples).
    pub fn run(&mut self, duration: f64, setpoint: Option<f64>) {
        self.time.clear();
        self.velocity.clear();
        self.control_input.clear();

        let capacity = (duration / self.dt) as usize + 1;
        let cap = capacity.min(1_000_000);
        self.time.reserve(cap);
        self.velocity.reserve(cap);
        self.control_input.reserve(cap);

        if let (Some(sp), Some(controller)) = (setpoint, self.controller.as_deref_mut()) {
            controller.set_setpoint(sp);
            controller.reset();
        }

        let mut t = 0.0;
        while t <= duration {
            self.time.push(t);
            self.velocity.push(self.vehicle.velocity());

            let control_input = match self.controller.as_deref_mut() {
                Some(controller) => controller.compute(self.vehicle.velocity(), self.dt),
                None => 0.0,
            };
            self.control_input.push(control_input);

            self.vehicle.update(control_input, self.dt);
            t += self.dt;
        }
    }

    /// Time it took the velocity to enter and stay within
    /// `error_threshold_percent` of `target`, or `None` if it never settles
    /// (or nothing has been recorded yet).
    pub fn settling_time(&self, target: f64, error_threshold_percent: f64) -> Option<f64> {
        metrics::settling_time(&self.time, &self.velocity, target, error_threshold_percent)
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Sample times (s), one per recorded step.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Velocity history (m/s), index-aligned with [`time`](Simulation::time).
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Control force history (N), index-aligned with
    /// [`time`](Simulation::time). All zeros when no controller is attached.
    pub fn control_input(&self) -> &[f64] {
        &self.control_input
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn controller(&self) -> Option<&dyn Controller> {
        self.controller.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Pid;
    use crate::vehicle::VehicleConfig;

    use approx::assert_relative_eq;

    fn coasting_sim() -> Simulation {
        let vehicle = Vehicle::new(VehicleConfig::default()).unwrap();
        Simulation::new(vehicle, SimConfig::default()).unwrap()
    }

    fn cruise_sim() -> Simulation {
        coasting_sim().with_controller(Box::new(Pid::new(1.0, 0.6, 0.0, 5.0)))
    }

    #[test]
    fn inclusive_endpoint_sample_count() {
        let mut sim = coasting_sim();
        sim.run(100.0, None);
        // t = 0..100 inclusive at dt = 1
        assert_eq!(sim.time().len(), 101);
        assert_eq!(sim.velocity().len(), 101);
        assert_eq!(sim.control_input().len(), 101);
        assert_eq!(sim.time()[0], 0.0);
        assert_eq!(sim.velocity()[0], 10.0);
    }

    #[test]
    fn uncontrolled_run_has_zero_control_input() {
        let mut sim = coasting_sim();
        sim.run(20.0, None);
        assert!(sim.control_input().iter().all(|&u| u == 0.0));
        // Coasting from +10 m/s: drag only ever slows the vehicle down
        for pair in sim.velocity().windows(2) {
            assert!(pair[1] < pair[0]);
            assert!(pair[1] > 0.0);
        }
    }

    #[test]
    fn closed_loop_reference_trajectory() {
        let mut sim = cruise_sim();
        sim.run(100.0, None);

        assert_eq!(sim.velocity().len(), 101);
        assert_eq!(sim.velocity()[0], 10.0);
        // First step: error = -5, integral = -5, u = -5 - 3 = -8,
        // drag = -5, a = -13, v = 10 - 13 = -3
        assert_eq!(sim.velocity()[1], -3.0);
        assert_eq!(sim.control_input()[0], -8.0);
        // Converged to the setpoint by the end of the window
        assert_relative_eq!(*sim.velocity().last().unwrap(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn reference_settling_time() {
        let mut sim = cruise_sim();
        sim.run(100.0, None);
        assert_eq!(sim.settling_time(5.0, 1.0), Some(17.0));
    }

    #[test]
    fn deterministic_across_fresh_runs() {
        let mut a = cruise_sim();
        let mut b = cruise_sim();
        a.run(100.0, None);
        b.run(100.0, None);
        assert_eq!(a.time(), b.time());
        assert_eq!(a.velocity(), b.velocity());
        assert_eq!(a.control_input(), b.control_input());
    }

    #[test]
    fn rerun_overwrites_histories() {
        let mut sim = cruise_sim();
        sim.run(100.0, None);
        sim.run(10.0, None);
        assert_eq!(sim.time().len(), 11);
        assert_eq!(sim.time()[0], 0.0);
    }

    #[test]
    fn setpoint_override_retargets_and_resets_controller() {
        let mut sim = cruise_sim();
        sim.run(50.0, None);
        sim.run(50.0, Some(2.0));
        let controller = sim.controller().unwrap();
        assert_eq!(controller.setpoint(), 2.0);
        // The loop steered toward the new target after the reset
        assert_relative_eq!(*sim.velocity().last().unwrap(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn no_settling_before_any_run() {
        let sim = cruise_sim();
        assert_eq!(sim.settling_time(5.0, 1.0), None);
    }

    #[test]
    fn rejects_non_positive_time_step() {
        let vehicle = Vehicle::new(VehicleConfig::default()).unwrap();
        let err = Simulation::new(vehicle, SimConfig { dt: 0.0 }).unwrap_err();
        assert_eq!(err, ConfigError::NonPositiveTimeStep(0.0));
    }

    #[test]
    fn fractional_time_step_sample_count() {
        let vehicle = Vehicle::new(VehicleConfig::default()).unwrap();
        let mut sim = Simulation::new(vehicle, SimConfig { dt: 0.5 }).unwrap();
        sim.run(10.0, None);
        // 0.0, 0.5, ..., 10.0
        assert_eq!(sim.time().len(), 21);
    }
}
