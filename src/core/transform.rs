//! Affine Abbildung zwischen Daten- und Display-Koordinaten.

use glam::{DVec2, Vec2};

/// Abbildung vom sichtbaren Datenbereich auf das Plot-Rechteck in Pixeln.
///
/// Daten-Koordinaten sind `f64` (Fit-Genauigkeit), Display-Koordinaten `f32`
/// (Pixel). Die y-Achse wird gespiegelt: Display-y waechst nach unten.
#[derive(Debug, Clone)]
pub struct PlotTransform {
    /// Untere linke Ecke des sichtbaren Datenbereichs
    pub data_min: DVec2,
    /// Obere rechte Ecke des sichtbaren Datenbereichs
    pub data_max: DVec2,
    /// Obere linke Ecke des Plot-Rechtecks in Display-Pixeln
    pub screen_origin: Vec2,
    /// Groesse des Plot-Rechtecks in Display-Pixeln
    pub screen_size: Vec2,
}

impl PlotTransform {
    /// Rand um den Datenbereich relativ zur Datenspanne.
    pub const DATA_MARGIN: f64 = 0.08;

    /// Erstellt eine Transformation fuer den gegebenen Datenbereich.
    pub fn new(data_min: DVec2, data_max: DVec2, screen_origin: Vec2, screen_size: Vec2) -> Self {
        Self {
            data_min,
            data_max,
            screen_origin,
            screen_size,
        }
    }

    /// Erstellt eine Transformation, die alle Datenpunkte mit Rand umfasst.
    ///
    /// Entartete Spannen (alle x gleich, alle y gleich) werden auf eine
    /// Einheitsspanne aufgeweitet, damit die Abbildung invertierbar bleibt.
    pub fn fit_to_data(xs: &[f64], ys: &[f64], screen_origin: Vec2, screen_size: Vec2) -> Self {
        let (min_x, max_x) = span(xs);
        let (min_y, max_y) = span(ys);
        let pad_x = ((max_x - min_x) * Self::DATA_MARGIN).max(0.5);
        let pad_y = ((max_y - min_y) * Self::DATA_MARGIN).max(0.5);
        Self::new(
            DVec2::new(min_x - pad_x, min_y - pad_y),
            DVec2::new(max_x + pad_x, max_y + pad_y),
            screen_origin,
            screen_size,
        )
    }

    /// Passt das Ziel-Rechteck an (z.B. nach Viewport-Resize).
    pub fn set_screen_rect(&mut self, origin: Vec2, size: Vec2) {
        self.screen_origin = origin;
        self.screen_size = size;
    }

    /// Konvertiert Daten-Koordinaten zu Display-Koordinaten.
    pub fn data_to_display(&self, p: DVec2) -> Vec2 {
        let extent = self.data_max - self.data_min;
        let fx = ((p.x - self.data_min.x) / extent.x) as f32;
        let fy = ((p.y - self.data_min.y) / extent.y) as f32;
        Vec2::new(
            self.screen_origin.x + fx * self.screen_size.x,
            // y gespiegelt: Daten-Minimum liegt am unteren Rand
            self.screen_origin.y + (1.0 - fy) * self.screen_size.y,
        )
    }

    /// Konvertiert Display-Koordinaten zu Daten-Koordinaten (Inverse).
    pub fn display_to_data(&self, p: Vec2) -> DVec2 {
        let extent = self.data_max - self.data_min;
        let fx = ((p.x - self.screen_origin.x) / self.screen_size.x) as f64;
        let fy = 1.0 - ((p.y - self.screen_origin.y) / self.screen_size.y) as f64;
        DVec2::new(
            self.data_min.x + fx * extent.x,
            self.data_min.y + fy * extent.y,
        )
    }

    /// Konvertiert Achsen-Bruchteile (0..1, Ursprung unten links) zu
    /// Display-Koordinaten. Fuer die Default-Platzierung neuer Drag-Punkte.
    pub fn axes_fraction_to_display(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(
            self.screen_origin.x + fx * self.screen_size.x,
            self.screen_origin.y + (1.0 - fy) * self.screen_size.y,
        )
    }
}

impl Default for PlotTransform {
    fn default() -> Self {
        Self::new(
            DVec2::new(-1.0, -1.0),
            DVec2::new(1.0, 1.0),
            Vec2::ZERO,
            Vec2::new(800.0, 600.0),
        )
    }
}

/// Minimum und Maximum eines Slices; leere Slices liefern `(0, 1)`.
fn span(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}
