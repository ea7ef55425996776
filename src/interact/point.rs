//! Draggable Kontrollpunkte in Display-Koordinaten.

use glam::Vec2;

use crate::core::Rgba;

/// Stabile Kennung eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

/// Ein greifbarer Punkt auf der Zeichenflaeche.
///
/// Die Position lebt in Display-Koordinaten; die Daten-Koordinate entsteht
/// erst ueber die aktuelle `PlotTransform`. Damit bleibt der Punkt beim
/// Zoomen optisch stehen, bis er neu projiziert wird.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    pub id: PointId,
    /// Position in Display-Koordinaten
    pub display: Vec2,
    /// Sichtbarer Radius in Display-Einheiten
    pub radius: f32,
    pub color: Rgba,
    pub visible: bool,
}

impl ControlPoint {
    pub fn new(id: PointId, display: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            id,
            display,
            radius,
            color,
            visible: true,
        }
    }

    /// Greifdistanz-Test. Der Fangbereich ist um den Faktor `slack`
    /// groesser als der sichtbare Radius.
    pub fn hit_test(&self, pos: Vec2, slack: f32) -> bool {
        let reach = self.radius * slack;
        self.visible && self.display.distance_squared(pos) <= reach * reach
    }
}
