//! Interaktiver Kurvenfit-Editor.
//! Core-Funktionalitaet als Library exportiert fuer Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod curves;
pub mod interact;
pub mod shared;
pub mod solver;
pub mod ui;

pub use app::{FitCommand, FitController, FitError, FitId, FitResult, FitState, UiState};
pub use core::{DataSet, PlotShape, PlotTransform, Rgba};
pub use curves::{CombineOp, CurveKind, CurveModel, ModelExpr, Restriction, PREVIEW_SAMPLES};
pub use interact::{ArtistId, BlitSurface, ControlPoint, CurveEditor, DragController, PointId};
pub use shared::FitterOptions;
pub use solver::{CurveSolver, LevenbergMarquardt, LmConfig, SolveOutcome, SolverError, SolverFlag};
