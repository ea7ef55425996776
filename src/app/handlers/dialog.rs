//! Handler fuer den modalen Fit-Auswahl-Dialog.

use crate::app::fit_result::FitId;
use crate::app::FitState;

/// Oeffnet den Fit-Auswahl-Dialog. Solange er offen ist, verwirft der
/// Controller alle anderen Commands.
pub fn open_fit_selector(state: &mut FitState) {
    if state.fits.is_empty() {
        state.ui.status = "Noch keine Fits vorhanden".to_string();
        return;
    }
    state.ui.fit_selector_open = true;
}

/// Waehlt einen Fit und schliesst den Dialog. Unbekannte Kennungen
/// schliessen den Dialog ohne Auswahl.
pub fn choose_fit(state: &mut FitState, id: FitId) {
    if state.fits.contains_key(&id) {
        state.ui.chosen_fit = Some(id);
        state.ui.status = format!("Fit {} gewaehlt", id.0);
    } else {
        log::warn!("Unbekannte Fit-Kennung gewaehlt: {id:?}");
    }
    state.ui.fit_selector_open = false;
}

/// Schliesst den Dialog ohne Auswahl.
pub fn close_fit_selector(state: &mut FitState) {
    state.ui.fit_selector_open = false;
}
