//! Handler fuer Selektions-Operationen.

use crate::app::FitState;

/// Hebt die Auswahl auf. Der Fit-Pfad behandelt eine leere Auswahl als
/// "alle Punkte".
pub fn clear(state: &mut FitState) {
    state.data.select_none();
    state.rebuild_static_layer();
    log::debug!("Selektion aufgehoben");
}

/// Selektiert alle Datenpunkte.
pub fn select_all(state: &mut FitState) {
    state.data.select_all();
    state.rebuild_static_layer();
}

/// Ersetzt die Auswahl-Maske (z.B. aus Rect-Selektion der UI).
pub fn set_mask(state: &mut FitState, mask: Vec<bool>) {
    state.data.set_mask(mask);
    state.rebuild_static_layer();
    log::debug!("Selektion: {} Punkte", state.data.selected_count());
}
