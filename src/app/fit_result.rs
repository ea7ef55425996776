//! Unveraenderliches Ergebnis eines erfolgreichen Fits.

use glam::DVec2;

use crate::core::DataSet;
use crate::curves::ModelExpr;
use crate::solver::SolveOutcome;

/// Stabile Kennung eines abgeschlossenen Fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FitId(pub u64);

/// Schnappschuss eines Fits: Daten (mit Maske zum Fit-Zeitpunkt),
/// Modellbaum und Solver-Ergebnis. Nach der Erstellung unveraenderlich;
/// alle Abfragen sind rein.
#[derive(Debug, Clone)]
pub struct FitResult {
    data: DataSet,
    expr: ModelExpr,
    outcome: SolveOutcome,
}

impl FitResult {
    pub fn new(data: DataSet, expr: ModelExpr, outcome: SolveOutcome) -> Self {
        Self {
            data,
            expr,
            outcome,
        }
    }

    /// Wertet das gefittete Modell an einer Stelle aus.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.expr.eval(x, &self.outcome.params)
    }

    pub fn params(&self) -> &[f64] {
        &self.outcome.params
    }

    /// Standardfehler der Parameter: Wurzel der Kovarianz-Diagonale.
    pub fn parameter_errors(&self) -> Vec<f64> {
        self.outcome
            .covariance
            .iter()
            .enumerate()
            .map(|(i, row)| row[i].abs().sqrt())
            .collect()
    }

    pub fn covariance(&self) -> &[Vec<f64>] {
        &self.outcome.covariance
    }

    pub fn residuals(&self) -> &[f64] {
        &self.outcome.residuals
    }

    pub fn message(&self) -> &str {
        &self.outcome.message
    }

    pub fn nfev(&self) -> usize {
        self.outcome.nfev
    }

    pub fn expr(&self) -> &ModelExpr {
        &self.expr
    }

    /// Daten-Schnappschuss zum Fit-Zeitpunkt (inkl. Maske).
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    /// Sampelt die Fit-Kurve ueber den x-Bereich der gefitteten Daten.
    pub fn fit_curve(&self, samples: usize) -> Vec<DVec2> {
        let (lo, hi) = self.data.selected_x_range();
        let samples = samples.max(2);
        let step = (hi - lo) / (samples - 1) as f64;
        (0..samples)
            .map(|i| {
                let x = lo + step * i as f64;
                DVec2::new(x, self.evaluate(x))
            })
            .collect()
    }

    /// 1-Sigma-Unsicherheitsband des Modells an den gegebenen Stellen.
    ///
    /// Parameterunsicherheit wird ueber den Differenzen-Gradienten und die
    /// Kovarianzmatrix propagiert: `var = g' C g`.
    pub fn confidence_band(&self, xs: &[f64]) -> Vec<(f64, f64)> {
        xs.iter()
            .map(|&x| {
                let y = self.evaluate(x);
                let g = self.parameter_gradient(x);
                let mut variance = 0.0;
                for (i, gi) in g.iter().enumerate() {
                    for (j, gj) in g.iter().enumerate() {
                        variance += gi * gj * self.outcome.covariance[i][j];
                    }
                }
                let half_width = variance.max(0.0).sqrt();
                (y - half_width, y + half_width)
            })
            .collect()
    }

    /// Gradient des Modells nach den Parametern (Vorwaerts-Differenzen).
    fn parameter_gradient(&self, x: f64) -> Vec<f64> {
        let params = &self.outcome.params;
        let base = self.evaluate(x);
        let mut shifted = params.clone();
        (0..params.len())
            .map(|j| {
                let h = 1e-8 * params[j].abs().max(1.0);
                shifted[j] = params[j] + h;
                let d = (self.expr.eval(x, &shifted) - base) / h;
                shifted[j] = params[j];
                d
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::CurveKind;
    use crate::solver::SolverFlag;
    use approx::assert_relative_eq;

    fn line_fit() -> FitResult {
        let data = DataSet::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]);
        let outcome = SolveOutcome {
            params: vec![2.0, 1.0],
            covariance: vec![vec![0.04, 0.0], vec![0.0, 0.09]],
            residuals: vec![0.0, 0.0, 0.0],
            nfev: 12,
            message: "konvergiert".to_string(),
            flag: SolverFlag::Converged,
        };
        FitResult::new(data, ModelExpr::leaf(CurveKind::Line), outcome)
    }

    #[test]
    fn test_evaluate_uses_best_params() {
        let fit = line_fit();
        assert_relative_eq!(fit.evaluate(4.0), 9.0);
    }

    #[test]
    fn test_parameter_errors_are_sqrt_diagonal() {
        let fit = line_fit();
        let errors = fit.parameter_errors();
        assert_relative_eq!(errors[0], 0.2, epsilon = 1e-12);
        assert_relative_eq!(errors[1], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_curve_spans_data_range() {
        let fit = line_fit();
        let curve = fit.fit_curve(5);
        assert_eq!(curve.len(), 5);
        assert_relative_eq!(curve[0].x, 0.0);
        assert_relative_eq!(curve[4].x, 2.0);
        assert_relative_eq!(curve[4].y, 5.0);
    }

    #[test]
    fn test_confidence_band_brackets_curve() {
        let fit = line_fit();
        let band = fit.confidence_band(&[0.0, 1.0, 2.0]);
        for ((lo, hi), x) in band.iter().zip([0.0, 1.0, 2.0]) {
            let y = fit.evaluate(x);
            assert!(*lo <= y && y <= *hi);
            assert!(hi - lo > 0.0);
        }
    }
}
