//! Handler fuer Tool- und Drag-Lebenszyklus.

use glam::Vec2;

use crate::app::FitState;
use crate::curves::{CurveKind, ModelExpr};
use crate::interact::CurveEditor;

/// Aktiviert ein Einzelkurven-Tool.
pub fn enable_kind(state: &mut FitState, kind: CurveKind) {
    enable(state, ModelExpr::leaf(kind));
}

/// Aktiviert ein Tool fuer den gegebenen Modellbaum. Ein bereits aktives
/// Tool wird vorher sauber abgebaut.
pub fn enable(state: &mut FitState, expr: ModelExpr) {
    disable(state);

    let description = expr.describe();
    let editor = CurveEditor::create(
        expr,
        &mut state.surface,
        &mut state.drag,
        &state.transform,
        state.data.selected_x_range(),
        state.data.len(),
        &state.options,
    );
    state.editor = Some(editor);
    state.ui.status = format!("Tool aktiv: {description}");
    log::info!("Kurven-Tool aktiviert: {description}");
}

/// Deaktiviert das aktive Tool: Punkte, Beobachter und Artists werden
/// entfernt, ein laufender Drag abgebrochen.
pub fn disable(state: &mut FitState) {
    if let Some(editor) = state.editor.take() {
        state.drag.cancel_drag();
        editor.destroy(&mut state.surface, &mut state.drag);
        state.ui.status = "Tool deaktiviert".to_string();
    }
}

/// Primaertaste gedrueckt: versucht, einen Kontrollpunkt zu greifen.
pub fn drag_started(state: &mut FitState, pos: Vec2) {
    if let Some(id) = state.drag.on_button_press(pos) {
        log::debug!("Drag gestartet an Punkt {id:?}");
    }
}

/// Pointer bewegt: Commit an den Editor weiterreichen.
pub fn drag_moved(state: &mut FitState, pos: Vec2) {
    let Some(commit) = state.drag.on_pointer_move(pos) else {
        return;
    };
    if let Some(editor) = &state.editor {
        editor.handle_commit(&commit, &mut state.surface, &mut state.drag, &state.transform);
    }
}

/// Primaertaste losgelassen: Bewegungs-Lock freigeben.
pub fn drag_ended(state: &mut FitState) {
    if let Some(id) = state.drag.on_button_release() {
        log::debug!("Drag beendet an Punkt {id:?}");
    }
}

/// Drag abbrechen (Fokusverlust). Die letzte Position bleibt committed.
pub fn cancel_drag(state: &mut FitState) {
    state.drag.cancel_drag();
}
