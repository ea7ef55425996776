//! Session Controller fuer zentrale Command-Verarbeitung.

use super::{FitCommand, FitState};

/// Fuehrt FitCommands auf dem FitState aus.
/// Dispatcht an Feature-Handler in `handlers/`.
#[derive(Default)]
pub struct FitController;

impl FitController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Command.
    ///
    /// Waehrend der modale Fit-Auswahl-Dialog offen ist, werden nur dessen
    /// eigene Commands verarbeitet; alle anderen werden verworfen.
    pub fn handle_command(
        &mut self,
        state: &mut FitState,
        command: FitCommand,
    ) -> anyhow::Result<()> {
        if state.ui.fit_selector_open
            && !matches!(
                command,
                FitCommand::ChooseFit { .. } | FitCommand::CloseFitSelector
            )
        {
            log::debug!("Command waehrend modalem Dialog verworfen: {command:?}");
            return Ok(());
        }

        use super::handlers;

        match command {
            // === Tool-Lebenszyklus ===
            FitCommand::EnableTool { kind } => handlers::tool::enable_kind(state, kind),
            FitCommand::EnableCompositeTool { expr } => handlers::tool::enable(state, expr),
            FitCommand::DisableTool => handlers::tool::disable(state),

            // === Drag-Lebenszyklus ===
            FitCommand::PointDragStarted { pos } => handlers::tool::drag_started(state, pos),
            FitCommand::PointDragMoved { pos } => handlers::tool::drag_moved(state, pos),
            FitCommand::PointDragEnded => handlers::tool::drag_ended(state),
            FitCommand::CancelDrag => handlers::tool::cancel_drag(state),
            FitCommand::KeyPressed => log::trace!("Tastendruck ohne Wirkung angenommen"),

            // === Fit ===
            FitCommand::RequestFit => handlers::fit::request_fit(state)?,

            // === Selektion ===
            FitCommand::ClearSelection => handlers::selection::clear(state),
            FitCommand::SelectAll => handlers::selection::select_all(state),
            FitCommand::SetSelectionMask { mask } => handlers::selection::set_mask(state, mask),

            // === Fit-Auswahl-Dialog ===
            FitCommand::OpenFitSelector => handlers::dialog::open_fit_selector(state),
            FitCommand::ChooseFit { id } => handlers::dialog::choose_fit(state, id),
            FitCommand::CloseFitSelector => handlers::dialog::close_fit_selector(state),
        }

        Ok(())
    }
}
