//! Interaktions-Schicht: Drag-Punkte, Blit-Pipeline und Kurven-Editor.

pub mod blit;
pub mod drag;
pub mod editor;
pub mod point;

pub use blit::{ArtistId, BlitPause, BlitSurface};
pub use drag::{DragCommit, DragController, ObserverToken};
pub use editor::CurveEditor;
pub use point::{ControlPoint, PointId};
