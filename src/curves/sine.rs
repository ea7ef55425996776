//! Sinus: `f(x) = a*sin(b*x + c) + d`.

use super::CurveModel;
use glam::DVec2;

/// Sinuskurve; die zwei Drag-Punkte gelten als Viertelperiode auseinander.
pub struct SineCurve;

impl CurveModel for SineCurve {
    fn name(&self) -> &'static str {
        "Sinus"
    }

    fn formula(&self) -> &'static str {
        "f(x) = a·sin(b·x + c) + d"
    }

    fn eval(&self, x: f64, params: &[f64]) -> f64 {
        let (a, b, c, d) = (params[0], params[1], params[2], params[3]);
        a * (b * x + c).sin() + d
    }

    fn param_count(&self) -> usize {
        4
    }

    /// Amplitude = |y-Differenz|, Kreisfrequenz und Phase unter der Annahme
    /// einer Viertelperiode zwischen den Punkten, Offset = y von Punkt 2.
    fn derive_params(&self, p1: DVec2, p2: DVec2) -> Vec<f64> {
        let a = (p1.y - p2.y).abs();
        let b = std::f64::consts::FRAC_PI_2 / (p1.x - p2.x);
        let c = -b * p2.x;
        let d = p2.y;
        vec![a, b, c, d]
    }

    fn default_point_fractions(&self) -> [(f32, f32); 2] {
        [(0.4, 0.6), (0.6, 0.4)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point2_is_zero_crossing_of_oscillation() {
        // Am zweiten Punkt ist das Argument null: f(x2) = d
        let p1 = DVec2::new(1.0, 3.0);
        let p2 = DVec2::new(2.0, 1.0);
        let params = SineCurve.derive_params(p1, p2);
        assert_relative_eq!(SineCurve.eval(p2.x, &params), p2.y, epsilon = 1e-12);
    }

    #[test]
    fn test_point1_is_quarter_period_extremum() {
        // Eine Viertelperiode weiter steht sin auf 1: f(x1) = a + d
        let p1 = DVec2::new(1.0, 3.0);
        let p2 = DVec2::new(2.0, 1.0);
        let params = SineCurve.derive_params(p1, p2);
        assert_relative_eq!(SineCurve.eval(p1.x, &params), params[0] + params[3], epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_x_yields_non_finite_frequency() {
        let params = SineCurve.derive_params(DVec2::new(1.0, 2.0), DVec2::new(1.0, 0.0));
        assert!(!params[1].is_finite());
    }
}
