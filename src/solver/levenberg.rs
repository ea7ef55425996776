//! Levenberg-Marquardt mit numerischer Jacobi-Matrix.
//!
//! Klassisches Daempfungs-Schema: die Diagonale der Normalmatrix wird mit
//! `1 + lambda` skaliert; ein akzeptierter Schritt senkt lambda, ein
//! verworfener erhoeht es. Konvergenz, wenn die relative Chi-Quadrat-
//! Aenderung eines akzeptierten Schritts unter die Toleranz faellt.

use super::linear;
use super::{CurveSolver, SolveOutcome, SolverError, SolverFlag};

/// Abbruch- und Daempfungs-Parameter.
#[derive(Debug, Clone, Copy)]
pub struct LmConfig {
    pub max_iterations: usize,
    /// Relative Chi-Quadrat-Toleranz
    pub tolerance: f64,
    pub initial_lambda: f64,
    /// Faktor nach verworfenem Schritt
    pub lambda_up: f64,
    /// Faktor nach akzeptiertem Schritt
    pub lambda_down: f64,
}

impl Default for LmConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-10,
            initial_lambda: 1e-3,
            lambda_up: 10.0,
            lambda_down: 0.1,
        }
    }
}

/// Daempfung, ab der die Normalmatrix als hoffnungslos singulaer gilt.
const LAMBDA_GIVE_UP: f64 = 1e12;

/// Relative Schrittweite der Vorwaerts-Differenzen.
const JACOBIAN_STEP: f64 = 1e-8;

#[derive(Debug, Default)]
pub struct LevenbergMarquardt {
    config: LmConfig,
}

impl LevenbergMarquardt {
    pub fn new(config: LmConfig) -> Self {
        Self { config }
    }
}

impl CurveSolver for LevenbergMarquardt {
    fn solve(
        &self,
        model: &dyn Fn(f64, &[f64]) -> f64,
        x: &[f64],
        y: &[f64],
        seed: &[f64],
        sigma: Option<&[f64]>,
    ) -> Result<SolveOutcome, SolverError> {
        if x.is_empty() {
            return Err(SolverError::EmptyData);
        }
        if x.len() != y.len() {
            return Err(SolverError::DimensionMismatch {
                x_len: x.len(),
                other_len: y.len(),
            });
        }
        if let Some(s) = sigma {
            if s.len() != x.len() {
                return Err(SolverError::DimensionMismatch {
                    x_len: x.len(),
                    other_len: s.len(),
                });
            }
        }
        if seed.iter().any(|p| !p.is_finite()) {
            return Err(SolverError::NonFiniteSeed);
        }

        let weights: Vec<f64> = match sigma {
            Some(s) => s.iter().map(|&v| 1.0 / (v * v)).collect(),
            None => vec![1.0; x.len()],
        };

        let mut nfev = 0usize;
        let mut params = seed.to_vec();
        let mut residuals = residual_vector(model, x, y, &params, &mut nfev);
        let mut chi2 = weighted_chi2(&residuals, &weights);
        let mut lambda = self.config.initial_lambda;

        let mut flag = SolverFlag::MaxIterationsReached;
        let mut message = format!(
            "Iterationslimit ({}) erreicht",
            self.config.max_iterations
        );

        for iteration in 0..self.config.max_iterations {
            let jacobian = numeric_jacobian(model, x, &params, &mut nfev);
            let (jtj, jtr) = normal_equations(&jacobian, &residuals, &weights);

            // Schritt mit wachsender Daempfung suchen
            let step = loop {
                let damped = damp_diagonal(&jtj, lambda);
                match linear::solve(damped, jtr.clone()) {
                    Some(step) => break Some(step),
                    None => {
                        lambda *= self.config.lambda_up;
                        if lambda > LAMBDA_GIVE_UP {
                            break None;
                        }
                    }
                }
            };
            let Some(step) = step else {
                flag = SolverFlag::SingularNormalMatrix;
                message = "Normalmatrix singulaer, kein Schritt moeglich".to_string();
                break;
            };

            let candidate: Vec<f64> = params.iter().zip(&step).map(|(p, d)| p + d).collect();
            let candidate_residuals = residual_vector(model, x, y, &candidate, &mut nfev);
            let candidate_chi2 = weighted_chi2(&candidate_residuals, &weights);

            // Auch gleichbleibendes chi2 akzeptieren: exakte Fits erreichen 0
            if candidate_chi2.is_finite() && candidate_chi2 <= chi2 {
                let relative_drop = (chi2 - candidate_chi2) / chi2.max(f64::MIN_POSITIVE);
                params = candidate;
                residuals = candidate_residuals;
                chi2 = candidate_chi2;
                lambda *= self.config.lambda_down;

                if relative_drop < self.config.tolerance {
                    flag = SolverFlag::Converged;
                    message = format!(
                        "konvergiert nach {} Iterationen (chi2 = {chi2:.6e})",
                        iteration + 1
                    );
                    break;
                }
            } else {
                lambda *= self.config.lambda_up;
                if lambda > LAMBDA_GIVE_UP {
                    flag = SolverFlag::SingularNormalMatrix;
                    message = "Daempfung ausgereizt, kein akzeptierbarer Schritt".to_string();
                    break;
                }
            }
        }

        let covariance = covariance_matrix(model, x, &params, &weights, chi2, &mut nfev);
        log::debug!(
            "LM-Lauf: flag={flag:?}, chi2={chi2:.6e}, nfev={nfev}, params={params:?}"
        );

        Ok(SolveOutcome {
            params,
            covariance,
            residuals,
            nfev,
            message,
            flag,
        })
    }
}

// ── Bausteine ───────────────────────────────────────────────────────

fn residual_vector(
    model: &dyn Fn(f64, &[f64]) -> f64,
    x: &[f64],
    y: &[f64],
    params: &[f64],
    nfev: &mut usize,
) -> Vec<f64> {
    *nfev += 1;
    x.iter()
        .zip(y)
        .map(|(&xi, &yi)| yi - model(xi, params))
        .collect()
}

fn weighted_chi2(residuals: &[f64], weights: &[f64]) -> f64 {
    residuals
        .iter()
        .zip(weights)
        .map(|(r, w)| w * r * r)
        .sum()
}

/// Vorwaerts-Differenzen-Jacobi: `J[i][j] = df(x_i)/dp_j`.
fn numeric_jacobian(
    model: &dyn Fn(f64, &[f64]) -> f64,
    x: &[f64],
    params: &[f64],
    nfev: &mut usize,
) -> Vec<Vec<f64>> {
    let base: Vec<f64> = x.iter().map(|&xi| model(xi, params)).collect();
    *nfev += 1;

    let mut jacobian = vec![vec![0.0; params.len()]; x.len()];
    let mut shifted = params.to_vec();
    for j in 0..params.len() {
        let h = JACOBIAN_STEP * params[j].abs().max(1.0);
        shifted[j] = params[j] + h;
        for (i, &xi) in x.iter().enumerate() {
            jacobian[i][j] = (model(xi, &shifted) - base[i]) / h;
        }
        shifted[j] = params[j];
        *nfev += 1;
    }
    jacobian
}

/// Normalgleichungen: `JᵀWJ` und `JᵀWr`.
fn normal_equations(
    jacobian: &[Vec<f64>],
    residuals: &[f64],
    weights: &[f64],
) -> (Vec<Vec<f64>>, Vec<f64>) {
    let n = jacobian.first().map_or(0, Vec::len);
    let mut jtj = vec![vec![0.0; n]; n];
    let mut jtr = vec![0.0; n];
    for (row, (&r, &w)) in jacobian.iter().zip(residuals.iter().zip(weights)) {
        for j in 0..n {
            jtr[j] += w * row[j] * r;
            for k in 0..n {
                jtj[j][k] += w * row[j] * row[k];
            }
        }
    }
    (jtj, jtr)
}

fn damp_diagonal(jtj: &[Vec<f64>], lambda: f64) -> Vec<Vec<f64>> {
    let mut damped = jtj.to_vec();
    for (j, row) in damped.iter_mut().enumerate() {
        row[j] *= 1.0 + lambda;
    }
    damped
}

/// Kovarianz `(JᵀWJ)⁻¹ · s²` mit `s² = chi2/(m−n)` (1 bei m <= n).
/// Singulaere Normalmatrix liefert eine NaN-Matrix.
fn covariance_matrix(
    model: &dyn Fn(f64, &[f64]) -> f64,
    x: &[f64],
    params: &[f64],
    weights: &[f64],
    chi2: f64,
    nfev: &mut usize,
) -> Vec<Vec<f64>> {
    let n = params.len();
    let jacobian = numeric_jacobian(model, x, params, nfev);
    let residual_zeros = vec![0.0; x.len()];
    let (jtj, _) = normal_equations(&jacobian, &residual_zeros, weights);

    let Some(mut inv) = linear::invert(&jtj) else {
        return vec![vec![f64::NAN; n]; n];
    };
    let dof = x.len().saturating_sub(n);
    let scale = if dof > 0 { chi2 / dof as f64 } else { 1.0 };
    for row in &mut inv {
        for v in row {
            *v *= scale;
        }
    }
    inv
}
