use eframe::egui;
use egui_plot::{HLine, Line, LineStyle, Plot, PlotPoints};

use cruise_sim::{Pid, SimConfig, Simulation, Vehicle, VehicleConfig};

const SETPOINT: f64 = 5.0;
const ERROR_THRESHOLD_PERCENT: f64 = 1.0;

fn main() -> eframe::Result {
    let vehicle = Vehicle::new(VehicleConfig::default()).expect("default vehicle config is valid");
    let mut sim = Simulation::new(vehicle, SimConfig::default())
        .expect("default sim config is valid")
        .with_controller(Box::new(Pid::new(1.0, 0.6, 0.0, SETPOINT)));
    sim.run(100.0, None);

    let app = CruiseViz { sim };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Cruise Control Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct CruiseViz {
    sim: Simulation,
}

impl eframe::App for CruiseViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let band = SETPOINT * ERROR_THRESHOLD_PERCENT / 100.0;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Cruise control step response");
            let summary = match self.sim.settling_time(SETPOINT, ERROR_THRESHOLD_PERCENT) {
                Some(t) => format!("settled in {t:.2} s"),
                None => "did not settle".to_string(),
            };
            ui.label(format!(
                "Setpoint: {SETPOINT} m/s  |  Band: ±{band} m/s  |  {summary}  |  {} samples",
                self.sim.time().len(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Velocity vs Time, with setpoint and error band
                ui.vertical(|ui| {
                    ui.label("Velocity (m/s)");
                    let points: PlotPoints = self
                        .sim
                        .time()
                        .iter()
                        .zip(self.sim.velocity())
                        .map(|(&t, &v)| [t, v])
                        .collect();
                    Plot::new("velocity")
                        .width(half_w)
                        .height(available.y - 8.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Velocity", points));
                            plot_ui.hline(HLine::new("Setpoint", SETPOINT));
                            plot_ui.hline(
                                HLine::new("+1% band", SETPOINT + band)
                                    .style(LineStyle::dashed_loose()),
                            );
                            plot_ui.hline(
                                HLine::new("-1% band", SETPOINT - band)
                                    .style(LineStyle::dashed_loose()),
                            );
                        });
                });

                // Control force vs Time
                ui.vertical(|ui| {
                    ui.label("Control Force (N)");
                    let points: PlotPoints = self
                        .sim
                        .time()
                        .iter()
                        .zip(self.sim.control_input())
                        .map(|(&t, &u)| [t, u])
                        .collect();
                    Plot::new("control")
                        .width(half_w)
                        .height(available.y - 8.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Force", points));
                        });
                });
            });
        });
    }
}
