//! Gerade: `f(x) = m*x + n`.

use super::CurveModel;
use glam::DVec2;

/// Gerade durch zwei Drag-Punkte.
pub struct LineCurve;

impl CurveModel for LineCurve {
    fn name(&self) -> &'static str {
        "Gerade"
    }

    fn formula(&self) -> &'static str {
        "f(x) = m·x + n"
    }

    fn eval(&self, x: f64, params: &[f64]) -> f64 {
        params[0] * x + params[1]
    }

    fn param_count(&self) -> usize {
        2
    }

    /// Zwei-Punkte-Form; gleiche x-Werte liefern den Fallback `(0, 0)`
    /// statt einer Division durch null.
    fn derive_params(&self, p1: DVec2, p2: DVec2) -> Vec<f64> {
        if p2.x - p1.x == 0.0 {
            return vec![0.0, 0.0];
        }
        let m = (p2.y - p1.y) / (p2.x - p1.x);
        let n = m * (-p2.x) + p2.y;
        vec![m, n]
    }

    fn default_point_fractions(&self) -> [(f32, f32); 2] {
        [(0.2, 0.3), (0.8, 0.7)]
    }
}
