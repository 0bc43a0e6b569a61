/// Trait for feedback controllers driving the simulation loop.
///
/// Implement this to plug custom control laws into
/// [`Simulation`](crate::sim::Simulation): bang-bang logic, or a
/// gain-scheduled variant that swaps parameter sets by operating region.
/// The loop calls [`compute`](Controller::compute) once per step with the
/// measured process variable and applies the returned force to the plant.
pub trait Controller {
    /// Compute the control force (N) from the measured process variable.
    ///
    /// `dt` is the loop's fixed step in seconds and is never zero when
    /// driven by the simulation loop.
    fn compute(&mut self, process_variable: f64, dt: f64) -> f64;

    /// Change the target the controller steers toward.
    fn set_setpoint(&mut self, setpoint: f64);

    /// Current target.
    fn setpoint(&self) -> f64;

    /// Clear internal state (e.g. PID integrators). Called by the loop
    /// whenever the setpoint changes between runs.
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}
