use cruise_sim::{Pid, SimConfig, Simulation, Vehicle, VehicleConfig};

const SETPOINT: f64 = 5.0; // m/s
const DURATION: f64 = 100.0; // s
const ERROR_THRESHOLD_PERCENT: f64 = 1.0;
const SETTLING_TARGET_S: f64 = 30.0;

fn main() {
    let config = VehicleConfig::default();
    let sim_config = SimConfig::default();

    println!();
    println!("====================================================================");
    println!("  CRUISE CONTROL SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Vehicle Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.1} kg    Drag coeff:   {:>8.3} kg/m",
        config.mass, config.drag_coefficient
    );
    println!(
        "  Initial vel:   {:>8.1} m/s   Time step:    {:>8.1} s",
        config.initial_velocity, sim_config.dt
    );
    println!();

    // -----------------------------------------------------------------------
    // Uncontrolled: coast under drag alone
    // -----------------------------------------------------------------------
    println!("  Uncontrolled Run (drag only, {DURATION:.0} s)");
    println!("  ──────────────────────────────────────────────────────────────────");

    let vehicle = Vehicle::new(config).expect("default vehicle config is valid");
    let mut coast = Simulation::new(vehicle, sim_config).expect("default sim config is valid");
    coast.run(DURATION, None);

    let final_coast = *coast.velocity().last().unwrap();
    println!(
        "  Final velocity: {:.3} m/s after {} samples",
        final_coast,
        coast.velocity().len()
    );
    println!();

    // -----------------------------------------------------------------------
    // PID-controlled: hold the cruise setpoint
    // -----------------------------------------------------------------------
    let (kp, ki, kd) = (1.0, 0.6, 0.0);
    println!("  PID Run (kp={kp}, ki={ki}, kd={kd}, setpoint={SETPOINT} m/s)");
    println!("  ──────────────────────────────────────────────────────────────────");

    let vehicle = Vehicle::new(config).expect("default vehicle config is valid");
    let mut cruise = Simulation::new(vehicle, sim_config)
        .expect("default sim config is valid")
        .with_controller(Box::new(Pid::new(kp, ki, kd, SETPOINT)));
    cruise.run(DURATION, None);

    match cruise.settling_time(SETPOINT, ERROR_THRESHOLD_PERCENT) {
        Some(t) if t <= SETTLING_TARGET_S => println!(
            "  Settled within {ERROR_THRESHOLD_PERCENT}% of setpoint ({SETPOINT} m/s) in {t:.2} s"
        ),
        _ => println!(
            "  Did not settle within {ERROR_THRESHOLD_PERCENT}% of setpoint in under {SETTLING_TARGET_S:.0} s"
        ),
    }
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>10}  {:>10}  {:>10}",
        "t (s)", "vel (m/s)", "err (m/s)", "force (N)"
    );
    println!("  {}", "─".repeat(45));

    let sample_interval = (cruise.time().len() / 20).max(1);
    for (i, &t) in cruise.time().iter().enumerate() {
        if i % sample_interval != 0 && i != cruise.time().len() - 1 {
            continue;
        }
        let v = cruise.velocity()[i];
        let u = cruise.control_input()[i];
        println!(
            "  {:>7.1}  {:>10.4}  {:>10.4}  {:>10.4}",
            t,
            v,
            SETPOINT - v,
            u
        );
    }

    println!();
    println!(
        "  Simulation: {} steps, dt={} s",
        cruise.time().len(),
        cruise.dt()
    );
    println!("====================================================================");
    println!();
}
