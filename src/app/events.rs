//! FitCommand-Enum fuer den Command-Datenfluss.
//!
//! Die UI erzeugt Commands, der Controller fuehrt sie auf dem FitState aus.
//! Commands tragen alle Eingabedaten mit, damit sie ohne UI-Kontext
//! verarbeitet und getestet werden koennen.

use glam::Vec2;

use super::fit_result::FitId;
use crate::curves::{CurveKind, ModelExpr};

/// Alle mutierenden Operationen der Fit-Session.
#[derive(Debug, Clone)]
pub enum FitCommand {
    // ── Tool-Lebenszyklus ───────────────────────────────────────
    /// Einzelkurven-Tool aktivieren (ersetzt ein aktives Tool)
    EnableTool { kind: CurveKind },
    /// Zusammengesetztes Modell als Tool aktivieren
    EnableCompositeTool { expr: ModelExpr },
    /// Aktives Tool deaktivieren, Punkte und Preview entfernen
    DisableTool,

    // ── Drag-Lebenszyklus ───────────────────────────────────────
    /// Primaertaste gedrueckt (Display-Koordinaten)
    PointDragStarted { pos: Vec2 },
    /// Pointer bewegt waehrend eines Drags
    PointDragMoved { pos: Vec2 },
    /// Primaertaste losgelassen
    PointDragEnded,
    /// Drag abbrechen (z.B. Fokusverlust)
    CancelDrag,
    /// Tastendruck ueber dem Plot. Wird angenommen, aber nicht
    /// verarbeitet; Erweiterungspunkt fuer Tastatur-Steuerung.
    KeyPressed,

    // ── Fit ─────────────────────────────────────────────────────
    /// Fit mit den aktuellen Kontrollpunkten als Startwerten anstossen
    RequestFit,

    // ── Selektion ───────────────────────────────────────────────
    /// Auswahl aufheben
    ClearSelection,
    /// Alle Datenpunkte selektieren
    SelectAll,
    /// Auswahl-Maske ersetzen
    SetSelectionMask { mask: Vec<bool> },

    // ── Fit-Auswahl-Dialog ──────────────────────────────────────
    /// Modalen Fit-Auswahl-Dialog oeffnen
    OpenFitSelector,
    /// Fit im Dialog waehlen und Dialog schliessen
    ChooseFit { id: FitId },
    /// Dialog ohne Auswahl schliessen
    CloseFitSelector,
}
