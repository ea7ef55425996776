//! Plot-Primitive fuer die Render-Ebene.
//!
//! Reine Geometrie in Display-Koordinaten; das Zeichnen uebernimmt die
//! UI-Schicht. `PartialEq` erlaubt bitgenaue Frame-Vergleiche in Tests.

use glam::Vec2;

/// RGBA-Farbe (0..1 pro Kanal).
pub type Rgba = [f32; 4];

/// Ein zeichenbares Primitiv in Display-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotShape {
    /// Linienzug (z.B. Kurven-Preview oder Fit-Linie)
    Polyline {
        /// Stuetzpunkte in Display-Koordinaten
        points: Vec<Vec2>,
        /// Linienstaerke in Pixeln
        stroke_width: f32,
        /// Linienfarbe
        color: Rgba,
        /// Gestrichelt (Fit-Linien) oder durchgezogen (Previews)
        dashed: bool,
    },
    /// Punktwolke (Scatter-Daten und Kontrollpunkt-Marker)
    Points {
        /// Punkt-Positionen in Display-Koordinaten
        points: Vec<Vec2>,
        /// Marker-Radius in Pixeln
        radius: f32,
        /// Marker-Farbe
        color: Rgba,
    },
}

impl PlotShape {
    /// Durchgezogener Linienzug.
    pub fn solid_polyline(points: Vec<Vec2>, stroke_width: f32, color: Rgba) -> Self {
        PlotShape::Polyline {
            points,
            stroke_width,
            color,
            dashed: false,
        }
    }

    /// Gestrichelter Linienzug (Fit-Ergebnis).
    pub fn dashed_polyline(points: Vec<Vec2>, stroke_width: f32, color: Rgba) -> Self {
        PlotShape::Polyline {
            points,
            stroke_width,
            color,
            dashed: true,
        }
    }
}
