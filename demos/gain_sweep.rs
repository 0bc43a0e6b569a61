use cruise_sim::{Pid, SimConfig, Simulation, Vehicle, VehicleConfig};

const SETPOINT: f64 = 5.0;
const DURATION: f64 = 100.0;

/// Sweep PID gains over a small grid. Every combination gets its own
/// simulation instance — runs share no state, so the sweep could just as
/// well be farmed out across threads.
fn main() {
    let kp_values = [0.5, 1.0, 2.0];
    let ki_values = [0.0, 0.3, 0.6];

    println!("Gain sweep: setpoint {SETPOINT} m/s, {DURATION:.0} s at dt=1");
    println!("{:>6}  {:>6}  {:>14}", "kp", "ki", "settling (s)");
    println!("{}", "-".repeat(30));

    for &kp in &kp_values {
        for &ki in &ki_values {
            let vehicle = Vehicle::new(VehicleConfig::default()).expect("valid vehicle config");
            let mut sim = Simulation::new(vehicle, SimConfig::default())
                .expect("valid sim config")
                .with_controller(Box::new(Pid::new(kp, ki, 0.0, SETPOINT)));
            sim.run(DURATION, None);

            match sim.settling_time(SETPOINT, 1.0) {
                Some(t) => println!("{kp:>6.2}  {ki:>6.2}  {t:>14.2}"),
                None => println!("{kp:>6.2}  {ki:>6.2}  {:>14}", "never"),
            }
        }
    }
}
