//! Status-Bar am unteren Bildschirmrand.

use crate::app::FitState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &FitState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {} | Selektiert: {}",
                state.data.len(),
                state.data.selected_count()
            ));

            ui.separator();
            ui.label(format!("Fits: {}", state.fits.len()));

            if let Ok(fit) = state.get_last_fit() {
                ui.separator();
                let params: Vec<String> =
                    fit.params().iter().map(|p| format!("{p:.4}")).collect();
                ui.label(format!(
                    "Letzter Fit: {} [{}]",
                    fit.expr().describe(),
                    params.join(", ")
                ));
            }

            if !state.ui.status.is_empty() {
                ui.separator();
                ui.label(&state.ui.status);
            }
        });
    });
}
