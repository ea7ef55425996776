//! Zentrale Konfiguration fuer den Kurvenfit-Editor.
//!
//! `FitterOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Sichtbarer Radius eines Kontrollpunkts in Display-Einheiten.
pub const POINT_RADIUS: f32 = 5.0;
/// Fangbereich relativ zum sichtbaren Radius.
pub const POINT_HIT_SLACK: f32 = 1.5;
/// Farbe der Kontrollpunkte (RGBA: Rot).
pub const POINT_COLOR: [f32; 4] = [0.9, 0.2, 0.2, 1.0];

// ── Kurven-Preview ──────────────────────────────────────────────────

/// Linienstaerke der Preview-Kurve.
pub const PREVIEW_STROKE_WIDTH: f32 = 1.5;
/// Farbe der Preview-Kurve (RGBA: Blau).
pub const PREVIEW_COLOR: [f32; 4] = [0.2, 0.4, 0.9, 1.0];

// ── Fit-Linien ──────────────────────────────────────────────────────

/// Linienstaerke einer gezeichneten Fit-Kurve.
pub const FIT_STROKE_WIDTH: f32 = 1.5;
/// Farbe der Fit-Kurven (RGBA: Gruen).
pub const FIT_COLOR: [f32; 4] = [0.1, 0.7, 0.3, 1.0];

// ── Daten-Darstellung ───────────────────────────────────────────────

/// Radius der Daten-Marker in Display-Einheiten.
pub const DATA_MARKER_RADIUS: f32 = 3.0;
/// Farbe der Daten-Marker (RGBA: Grau).
pub const DATA_COLOR: [f32; 4] = [0.35, 0.35, 0.35, 1.0];
/// Farbe selektierter Daten-Marker (RGBA: Orange).
pub const DATA_COLOR_SELECTED: [f32; 4] = [1.0, 0.6, 0.1, 1.0];

// ── Solver ──────────────────────────────────────────────────────────

/// Maximale Iterationszahl des Levenberg-Marquardt-Solvers.
pub const SOLVER_MAX_ITERATIONS: usize = 100;
/// Konvergenz-Toleranz (relative Chi-Quadrat-Aenderung).
pub const SOLVER_TOLERANCE: f64 = 1e-10;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Fitter-Optionen.
/// Wird als `kurvenfit.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitterOptions {
    // ── Kontrollpunkte ──────────────────────────────────────────
    /// Sichtbarer Punktradius in Display-Einheiten
    pub point_radius: f32,
    /// Fangbereich relativ zum Punktradius
    pub point_hit_slack: f32,
    /// Farbe der Kontrollpunkte (RGBA)
    pub point_color: [f32; 4],

    // ── Preview ─────────────────────────────────────────────────
    /// Anzahl der Preview-Stuetzstellen
    pub preview_samples: usize,
    /// Linienstaerke der Preview-Kurve
    pub preview_stroke_width: f32,
    /// Farbe der Preview-Kurve
    pub preview_color: [f32; 4],

    // ── Fit-Linien ──────────────────────────────────────────────
    /// Linienstaerke gezeichneter Fit-Kurven
    pub fit_stroke_width: f32,
    /// Farbe gezeichneter Fit-Kurven
    pub fit_color: [f32; 4],

    // ── Daten ───────────────────────────────────────────────────
    /// Radius der Daten-Marker
    pub data_marker_radius: f32,
    /// Farbe der Daten-Marker
    pub data_color: [f32; 4],
    /// Farbe selektierter Daten-Marker
    #[serde(default = "default_data_color_selected")]
    pub data_color_selected: [f32; 4],

    // ── Solver ──────────────────────────────────────────────────
    /// Maximale Solver-Iterationen
    pub solver_max_iterations: usize,
    /// Konvergenz-Toleranz des Solvers
    pub solver_tolerance: f64,
}

impl Default for FitterOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            point_hit_slack: POINT_HIT_SLACK,
            point_color: POINT_COLOR,

            preview_samples: crate::curves::PREVIEW_SAMPLES,
            preview_stroke_width: PREVIEW_STROKE_WIDTH,
            preview_color: PREVIEW_COLOR,

            fit_stroke_width: FIT_STROKE_WIDTH,
            fit_color: FIT_COLOR,

            data_marker_radius: DATA_MARKER_RADIUS,
            data_color: DATA_COLOR,
            data_color_selected: DATA_COLOR_SELECTED,

            solver_max_iterations: SOLVER_MAX_ITERATIONS,
            solver_tolerance: SOLVER_TOLERANCE,
        }
    }
}

/// Serde-Default fuer `data_color_selected` (Abwaertskompatibilitaet bestehender TOML-Dateien).
fn default_data_color_selected() -> [f32; 4] {
    DATA_COLOR_SELECTED
}

impl FitterOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("kurvenfit"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("kurvenfit.toml")
    }
}
