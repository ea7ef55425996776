//! Application-Layer: Controller, State, Events und Fit-Ergebnisse.

pub mod controller;
pub mod error;
pub mod events;
pub mod fit_result;
pub mod handlers;
pub mod state;

pub use controller::FitController;
pub use error::FitError;
pub use events::FitCommand;
pub use fit_result::{FitId, FitResult};
pub use state::{FitState, UiState};
