//! Lorentz-Kurve: `f(x) = A/pi * (W/2) / ((x-x0)^2 + (W/2)^2)`.

use super::{order_peak_side, CurveModel, Restriction};
use glam::DVec2;

/// Lorentz-Kurve aus Peak-Punkt (Punkt 1) und Halbwertspunkt (Punkt 2).
///
/// Der Seitenpunkt ist per Restriction auf die halbe Peak-Hoehe geklemmt,
/// markiert also immer den Halbwertspunkt; sein x-Abstand zum Peak ist die
/// halbe Halbwertsbreite.
pub struct LorentzianCurve;

impl CurveModel for LorentzianCurve {
    fn name(&self) -> &'static str {
        "Lorentz"
    }

    fn formula(&self) -> &'static str {
        "f(x) = A/π · (W/2) / ((x-x₀)² + (W/2)²)"
    }

    fn eval(&self, x: f64, params: &[f64]) -> f64 {
        let (a, x0, fwhm) = (params[0], params[1], params[2]);
        let hw = fwhm / 2.0;
        a / std::f64::consts::PI * hw / ((x - x0) * (x - x0) + hw * hw)
    }

    fn param_count(&self) -> usize {
        3
    }

    /// Peak/Seite-Konvention wie bei Gauss; `x0 = peak_x`,
    /// `FWHM = 2*|peak_x - side_x|`, `A` aus Peak-Hoehe und Breite.
    fn derive_params(&self, p1: DVec2, p2: DVec2) -> Vec<f64> {
        let (peak, side) = order_peak_side(p1, p2);
        let x0 = peak.x;
        let fwhm = 2.0 * (peak.x - side.x).abs();
        let a = peak.y * (fwhm / 2.0) * std::f64::consts::PI;
        vec![a, x0, fwhm]
    }

    fn secondary_restriction(&self) -> Option<Restriction> {
        Some(Restriction::HalfOfReferenceY)
    }

    fn default_point_fractions(&self) -> [(f32, f32); 2] {
        [(0.5, 0.7), (0.7, 0.3)]
    }
}
