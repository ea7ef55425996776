//! Cosinus: `f(x) = a*cos(b*x + c) + d`.

use super::CurveModel;
use glam::DVec2;

/// Cosinuskurve; Viertelperioden-Konvention wie beim Sinus, mit um `pi/2`
/// verschobener Phase.
pub struct CosineCurve;

impl CurveModel for CosineCurve {
    fn name(&self) -> &'static str {
        "Cosinus"
    }

    fn formula(&self) -> &'static str {
        "f(x) = a·cos(b·x + c) + d"
    }

    fn eval(&self, x: f64, params: &[f64]) -> f64 {
        let (a, b, c, d) = (params[0], params[1], params[2], params[3]);
        a * (b * x + c).cos() + d
    }

    fn param_count(&self) -> usize {
        4
    }

    fn derive_params(&self, p1: DVec2, p2: DVec2) -> Vec<f64> {
        let a = (p1.y - p2.y).abs();
        let b = -std::f64::consts::FRAC_PI_2 / (p1.x - p2.x);
        let c = std::f64::consts::FRAC_PI_2 - b * p2.x;
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
    fn test_point2_sits_on_offset() {
        // Am zweiten Punkt steht das Argument auf pi/2: f(x2) = d
        let p1 = DVec2::new(0.0, 4.0);
        let p2 = DVec2::new(1.0, 1.0);
        let params = CosineCurve.derive_params(p1, p2);
        assert_relative_eq!(CosineCurve.eval(p2.x, &params), p2.y, epsilon = 1e-12);
    }

    #[test]
    fn test_amplitude_matches_y_difference() {
        let p1 = DVec2::new(0.0, 4.0);
        let p2 = DVec2::new(1.0, 1.0);
        let params = CosineCurve.derive_params(p1, p2);
        assert_relative_eq!(params[0], 3.0, epsilon = 1e-12);
    }
}
