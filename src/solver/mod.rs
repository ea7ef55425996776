//! Nichtlineare Ausgleichsrechnung hinter einem Trait-Seam.

pub mod levenberg;
pub mod linear;

pub use levenberg::{LevenbergMarquardt, LmConfig};

use std::fmt;

/// Konvergenz-Status eines Solver-Laufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverFlag {
    /// Chi-Quadrat-Aenderung unter der Toleranz
    Converged,
    /// Iterationslimit erreicht ohne Konvergenz
    MaxIterationsReached,
    /// Normalmatrix auch unter starker Daempfung singulaer
    SingularNormalMatrix,
}

/// Ergebnis eines Solver-Laufs.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Beste gefundene Parameter
    pub params: Vec<f64>,
    /// Kovarianzmatrix der Parameter (Zeilen-major, n x n)
    pub covariance: Vec<Vec<f64>>,
    /// Residuen `y_i - f(x_i)` an den besten Parametern
    pub residuals: Vec<f64>,
    /// Anzahl der Funktionsauswertungen (volle Residuen-Vektoren)
    pub nfev: usize,
    /// Menschlich lesbare Statusmeldung
    pub message: String,
    pub flag: SolverFlag,
}

impl SolveOutcome {
    pub fn is_success(&self) -> bool {
        self.flag == SolverFlag::Converged
    }
}

/// Strukturelle Fehler, die einen Lauf verhindern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Keine Datenpunkte
    EmptyData,
    /// x und y (oder sigma) sind unterschiedlich lang
    DimensionMismatch { x_len: usize, other_len: usize },
    /// Startparameter enthalten NaN/Inf
    NonFiniteSeed,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::EmptyData => write!(f, "keine Datenpunkte zum Fitten"),
            SolverError::DimensionMismatch { x_len, other_len } => {
                write!(f, "Laengen passen nicht: x={x_len}, andere={other_len}")
            }
            SolverError::NonFiniteSeed => write!(f, "Startparameter sind nicht finit"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Seam zwischen Fit-Session und Ausgleichsrechnung.
///
/// `sigma` sind optionale Standardabweichungen pro Punkt; vorhandene Werte
/// gehen als Gewichte `1/sigma^2` in die Rechnung ein.
pub trait CurveSolver {
    fn solve(
        &self,
        model: &dyn Fn(f64, &[f64]) -> f64,
        x: &[f64],
        y: &[f64],
        seed: &[f64],
        sigma: Option<&[f64]>,
    ) -> Result<SolveOutcome, SolverError>;
}
