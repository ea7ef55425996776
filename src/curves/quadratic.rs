//! Parabel: `f(x) = a*x^2 + b*x + c`.

use super::{CurveModel, PREVIEW_MARGIN_FACTOR};
use glam::DVec2;

/// Parabel aus Scheitelpunkt (Punkt 1) und einem weiteren Punkt (Punkt 2).
pub struct QuadraticCurve;

impl CurveModel for QuadraticCurve {
    fn name(&self) -> &'static str {
        "Parabel"
    }

    fn formula(&self) -> &'static str {
        "f(x) = a·x² + b·x + c"
    }

    fn eval(&self, x: f64, params: &[f64]) -> f64 {
        params[0] * x * x + params[1] * x + params[2]
    }

    fn param_count(&self) -> usize {
        3
    }

    /// Scheitelform: Punkt 1 ist der Scheitel, Punkt 2 liegt auf der Parabel.
    /// Gleiche x-Werte ergeben `a = inf/NaN`, das sichtbar in die Preview
    /// fliesst.
    fn derive_params(&self, p1: DVec2, p2: DVec2) -> Vec<f64> {
        let dx = p2.x - p1.x;
        let a = (p2.y - p1.y) / (dx * dx);
        let b = -2.0 * a * p1.x;
        let c = p1.y + a * p1.x * p1.x;
        vec![a, b, c]
    }

    /// Fenster symmetrisch um den Scheitel (Punkt 1), nicht um beide Punkte.
    fn preview_window(&self, p1: DVec2, p2: DVec2) -> (f64, f64) {
        let dx = (p2.x - p1.x).abs() * PREVIEW_MARGIN_FACTOR;
        (p1.x - dx, p1.x + dx)
    }

    fn default_point_fractions(&self) -> [(f32, f32); 2] {
        [(0.5, 0.3), (0.7, 0.6)]
    }
}
