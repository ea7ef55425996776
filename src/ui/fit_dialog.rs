//! Modaler Fit-Auswahl-Dialog.

use crate::app::{FitCommand, FitState};

/// Zeigt den Dialog, solange er im UI-State offen ist, und gibt die
/// Auswahl-Commands zurueck.
pub fn show_fit_selector(ctx: &egui::Context, state: &FitState) -> Vec<FitCommand> {
    let mut commands = Vec::new();
    if !state.ui.fit_selector_open {
        return commands;
    }

    egui::Window::new("Fit auswaehlen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            for (id, fit) in &state.fits {
                let errors = fit.parameter_errors();
                let params: Vec<String> = fit
                    .params()
                    .iter()
                    .zip(&errors)
                    .map(|(p, e)| format!("{p:.3} +/- {e:.3}"))
                    .collect();
                let label = format!(
                    "#{}: {} [{}]",
                    id.0,
                    fit.expr().describe(),
                    params.join(", ")
                );
                if ui.button(label).clicked() {
                    commands.push(FitCommand::ChooseFit { id: *id });
                }
            }

            ui.separator();
            if ui.button("Schliessen").clicked() {
                commands.push(FitCommand::CloseFitSelector);
            }
        });

    commands
}
