//! Toolbar fuer Kurven-Werkzeugauswahl und Modell-Kombination.

use crate::app::{FitCommand, FitState};
use crate::curves::{CombineOp, CurveKind, ModelExpr};

/// Lokaler UI-Zustand des Kombinations-Baukastens.
#[derive(Debug, Clone)]
pub struct ComposeState {
    pub left: CurveKind,
    pub op: CombineOp,
    pub right: CurveKind,
}

impl Default for ComposeState {
    fn default() -> Self {
        Self {
            left: CurveKind::Gaussian,
            op: CombineOp::Add,
            right: CurveKind::Line,
        }
    }
}

const OPS: [CombineOp; 7] = [
    CombineOp::Add,
    CombineOp::Sub,
    CombineOp::Mul,
    CombineOp::Div,
    CombineOp::FloorDiv,
    CombineOp::Rem,
    CombineOp::Pow,
];

/// Rendert die Toolbar und gibt erzeugte Commands zurueck.
pub fn render_toolbar(
    ctx: &egui::Context,
    state: &FitState,
    compose: &mut ComposeState,
) -> Vec<FitCommand> {
    let mut commands = Vec::new();
    let active_kind = state.editor.as_ref().and_then(|e| match e.expr() {
        ModelExpr::Leaf(kind) => Some(*kind),
        _ => None,
    });

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Kurve:");
            ui.separator();

            for kind in CurveKind::ALL {
                let button = egui::Button::new(kind.name());
                let response = ui
                    .add(button.selected(active_kind == Some(kind)))
                    .on_hover_text(kind.model().formula());
                if response.clicked() {
                    commands.push(FitCommand::EnableTool { kind });
                }
            }

            ui.separator();
            if ui.button("Aus").clicked() {
                commands.push(FitCommand::DisableTool);
            }
            if ui.button("Fit").clicked() {
                commands.push(FitCommand::RequestFit);
            }
        });

        // ── Kombinations-Baukasten ──
        ui.horizontal(|ui| {
            ui.label("Kombinieren:");
            kind_combo(ui, "compose_left", &mut compose.left);
            egui::ComboBox::from_id_salt("compose_op")
                .selected_text(compose.op.symbol())
                .width(48.0)
                .show_ui(ui, |ui| {
                    for op in OPS {
                        ui.selectable_value(&mut compose.op, op, op.symbol());
                    }
                });
            kind_combo(ui, "compose_right", &mut compose.right);

            if ui.button("Aktivieren").clicked() {
                commands.push(FitCommand::EnableCompositeTool {
                    expr: ModelExpr::combine(
                        compose.op,
                        ModelExpr::leaf(compose.left),
                        ModelExpr::leaf(compose.right),
                    ),
                });
            }

            ui.separator();
            if ui.button("Fits...").clicked() {
                commands.push(FitCommand::OpenFitSelector);
            }
        });
    });

    commands
}

fn kind_combo(ui: &mut egui::Ui, id: &str, selected: &mut CurveKind) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.name())
        .show_ui(ui, |ui| {
            for kind in CurveKind::ALL {
                ui.selectable_value(selected, kind, kind.name());
            }
        });
}
