//! Plot-Input-Handling: Eingabe-Events → FitCommand.

use glam::Vec2;

use crate::app::FitCommand;

/// Uebersetzt die Pointer-Interaktion auf dem Plot in Drag-Commands.
///
/// Die Primaertaste treibt den Punkt-Drag; Fokusverlust waehrend eines
/// Drags bricht ihn ab (die letzte Position bleibt committed).
/// Tastendruecke werden als `KeyPressed` weitergereicht.
pub fn plot_commands(response: &egui::Response) -> Vec<FitCommand> {
    let mut commands = Vec::new();

    let pointer = response
        .interact_pointer_pos()
        .map(|p| Vec2::new(p.x, p.y));

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = pointer {
            commands.push(FitCommand::PointDragStarted { pos });
        }
    }
    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = pointer {
            commands.push(FitCommand::PointDragMoved { pos });
        }
    }
    if response.drag_stopped_by(egui::PointerButton::Primary) {
        commands.push(FitCommand::PointDragEnded);
    }
    if !response.ctx.input(|i| i.focused) {
        commands.push(FitCommand::CancelDrag);
    }

    let key_pressed = response.ctx.input(|i| {
        i.events
            .iter()
            .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
    });
    if key_pressed {
        commands.push(FitCommand::KeyPressed);
    }

    commands
}
