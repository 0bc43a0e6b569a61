use cruise_sim::{Controller, SimConfig, Simulation, Vehicle, VehicleConfig};

/// A bang-bang cruise controller: full throttle below the setpoint, full
/// braking above it. Crude, but it shows how any control law plugs into the
/// simulation loop through the `Controller` trait.
struct BangBangController {
    setpoint: f64,
    force: f64,
}

impl Controller for BangBangController {
    fn compute(&mut self, process_variable: f64, _dt: f64) -> f64 {
        if process_variable < self.setpoint {
            self.force
        } else {
            -self.force
        }
    }

    fn set_setpoint(&mut self, setpoint: f64) {
        self.setpoint = setpoint;
    }

    fn setpoint(&self) -> f64 {
        self.setpoint
    }

    fn name(&self) -> &str {
        "BangBang"
    }
}

fn main() {
    let vehicle = Vehicle::new(VehicleConfig::default()).expect("valid vehicle config");
    let controller = BangBangController {
        setpoint: 5.0,
        force: 2.0,
    };

    println!("Simulating with {} controller...", controller.name());
    let mut sim = Simulation::new(vehicle, SimConfig { dt: 0.1 })
        .expect("valid sim config")
        .with_controller(Box::new(controller));
    sim.run(100.0, None);

    let final_velocity = sim.velocity().last().unwrap();
    println!("Final velocity: {final_velocity:.3} m/s");
    println!("Samples: {}", sim.time().len());

    // Bang-bang chatters around the setpoint instead of converging, so a
    // tight band usually never captures it
    match sim.settling_time(5.0, 1.0) {
        Some(t) => println!("Settled within 1% in {t:.2} s"),
        None => println!("Never settled within 1% (chattering about the setpoint)"),
    }
    match sim.settling_time(5.0, 10.0) {
        Some(t) => println!("Settled within 10% in {t:.2} s"),
        None => println!("Never settled within 10%"),
    }
}
