//! Fehler der Fit-Session.

use std::fmt;

/// Fehler, die eine Fit-Operation ablehnen, ohne Zustand zu veraendern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// Es wurde noch kein Fit durchgefuehrt
    NoFitAvailable,
    /// Kein Kurven-Tool aktiv, es gibt nichts zu fitten
    NoActiveTool,
    /// Der Solver hat keine Konvergenz erreicht
    NoConvergence { message: String },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::NoFitAvailable => write!(f, "noch kein Fit vorhanden"),
            FitError::NoActiveTool => write!(f, "kein Kurven-Tool aktiv"),
            FitError::NoConvergence { message } => {
                write!(f, "Fit nicht konvergiert: {message}")
            }
        }
    }
}

impl std::error::Error for FitError {}
