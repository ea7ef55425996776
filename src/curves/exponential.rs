//! Exponentialfunktion: `f(x) = a*exp(b*x)`.

use super::CurveModel;
use glam::DVec2;

/// Exponentialkurve durch zwei Drag-Punkte.
pub struct ExponentialCurve;

impl CurveModel for ExponentialCurve {
    fn name(&self) -> &'static str {
        "Exponential"
    }

    fn formula(&self) -> &'static str {
        "f(x) = a·exp(b·x)"
    }

    fn eval(&self, x: f64, params: &[f64]) -> f64 {
        params[0] * (params[1] * x).exp()
    }

    fn param_count(&self) -> usize {
        2
    }

    /// `b = ln(y1/y2)/(x1-x2)`, `a = y1/exp(b*x1)`.
    ///
    /// Nicht-positive y-Werte oder zusammenfallende Punkte ergeben NaN/Inf,
    /// das sichtbar in die Preview fliesst statt zu werfen.
    fn derive_params(&self, p1: DVec2, p2: DVec2) -> Vec<f64> {
        let b = (p1.y / p2.y).ln() / (p1.x - p2.x);
        let a = p1.y / (b * p1.x).exp();
        vec![a, b]
    }

    fn default_point_fractions(&self) -> [(f32, f32); 2] {
        [(0.3, 0.3), (0.7, 0.7)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roundtrip_through_both_points() {
        let p1 = DVec2::new(0.0, 2.0);
        let p2 = DVec2::new(2.0, 8.0);
        let params = ExponentialCurve.derive_params(p1, p2);
        assert_relative_eq!(ExponentialCurve.eval(p1.x, &params), p1.y, epsilon = 1e-10);
        assert_relative_eq!(ExponentialCurve.eval(p2.x, &params), p2.y, epsilon = 1e-10);
    }

    #[test]
    fn test_decaying_exponential() {
        let p1 = DVec2::new(0.0, 10.0);
        let p2 = DVec2::new(1.0, 5.0);
        let params = ExponentialCurve.derive_params(p1, p2);
        assert!(params[1] < 0.0, "fallende Kurve braucht b < 0");
        assert_relative_eq!(params[0], 10.0, epsilon = 1e-10);
    }

    #[test]
    fn test_nonpositive_y_yields_non_finite() {
        let params = ExponentialCurve.derive_params(DVec2::new(0.0, -1.0), DVec2::new(1.0, 2.0));
        assert!(params.iter().any(|p| !p.is_finite()));
    }

    #[test]
    fn test_coincident_points_yield_non_finite() {
        let p = DVec2::new(1.0, 3.0);
        let params = ExponentialCurve.derive_params(p, p);
        assert!(params.iter().any(|p| !p.is_finite()));
    }
}
