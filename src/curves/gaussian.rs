//! Gauss-Glocke: `f(x) = A*exp(-0.5*(x-m)^2/s^2)`.

use super::{order_peak_side, CurveModel};
use glam::DVec2;

/// Gauss-Kurve aus Peak-Punkt (Punkt 1) und Seitenpunkt (Punkt 2).
pub struct GaussianCurve;

impl CurveModel for GaussianCurve {
    fn name(&self) -> &'static str {
        "Gauss"
    }

    fn formula(&self) -> &'static str {
        "f(x) = A·exp(-(x-m)²/2s²)"
    }

    fn eval(&self, x: f64, params: &[f64]) -> f64 {
        let (a, m, s) = (params[0], params[1], params[2]);
        a * (-0.5 * (x - m) * (x - m) / (s * s)).exp()
    }

    fn param_count(&self) -> usize {
        3
    }

    /// Peak/Seite werden bei Bedarf getauscht (vorzeichenbewusst), dann
    /// `m = peak_x`, `A = peak_y` und `s` aus dem Seitenabstand und dem
    /// Log-Verhaeltnis der Betraege. Der Betrag im Verhaeltnis traegt
    /// negative Peaks mit.
    fn derive_params(&self, p1: DVec2, p2: DVec2) -> Vec<f64> {
        let (peak, side) = order_peak_side(p1, p2);
        let m = peak.x;
        let a = peak.y;
        let s = (side.x - peak.x).abs() * (0.5 / (peak.y / side.y).abs().ln()).sqrt();
        vec![a, m, s]
    }

    fn default_point_fractions(&self) -> [(f32, f32); 2] {
        [(0.5, 0.7), (0.7, 0.4)]
    }
}
