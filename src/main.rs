//! Kurvenfit: interaktiver 2D-Kurvenfit mit Drag-Punkten.
//!
//! egui/eframe-Shell: sammelt UI-Commands ein, reicht sie an den
//! Controller durch und zeichnet den Frame der Blit-Pipeline.

use eframe::egui;
use kurvenfit::ui::{self, ComposeState};
use kurvenfit::{DataSet, FitController, FitState, FitterOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Kurvenfit v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_title("Kurvenfit"),
            ..Default::default()
        };

        eframe::run_native(
            "Kurvenfit",
            options,
            Box::new(|_cc| Ok(Box::new(FitApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct FitApp {
    state: FitState,
    controller: FitController,
    compose: ComposeState,
}

impl FitApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = FitterOptions::config_path();
        let options = FitterOptions::load_from_file(&config_path);

        Self {
            state: FitState::new(demo_data(), options),
            controller: FitController::new(),
            compose: ComposeState::default(),
        }
    }
}

impl eframe::App for FitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = Vec::new();
        commands.extend(ui::render_toolbar(ctx, &self.state, &mut self.compose));
        commands.extend(ui::show_fit_selector(ctx, &self.state));
        commands.extend(ui::render_plot_panel(ctx, &mut self.state));
        ui::render_status_bar(ctx, &self.state);

        for command in commands {
            if let Err(e) = self.controller.handle_command(&mut self.state, command) {
                log::warn!("Command fehlgeschlagen: {e}");
                self.state.ui.status = format!("Fehler: {e}");
            }
        }
    }
}

/// Deterministischer Demo-Datensatz: Gauss-Peak auf linearem Untergrund
/// mit pseudo-zufaelligem Rauschen.
fn demo_data() -> DataSet {
    let xs: Vec<f64> = (0..120).map(|i| i as f64 * 0.1).collect();
    let ys: Vec<f64> = xs
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let peak = 8.0 * (-0.5 * (x - 6.0) * (x - 6.0) / (1.5 * 1.5)).exp();
            let background = 0.4 * x + 1.0;
            let noise = 0.15 * (((i * 31 + 7) % 17) as f64 - 8.0) / 8.0;
            peak + background + noise
        })
        .collect();
    let yerr = vec![0.15; xs.len()];
    DataSet::new(xs, ys).with_errors(None, Some(yerr))
}
