//! Fit-Session State, zentrale Datenhaltung.

use glam::Vec2;
use indexmap::IndexMap;

use super::error::FitError;
use super::fit_result::{FitId, FitResult};
use crate::core::{DataSet, PlotShape, PlotTransform};
use crate::interact::{ArtistId, BlitSurface, CurveEditor, DragController};
use crate::shared::FitterOptions;
use crate::solver::{CurveSolver, LevenbergMarquardt, LmConfig};

/// UI-nahe Zustaende: Dialoge und Statuszeile.
#[derive(Debug, Default)]
pub struct UiState {
    /// Modaler Fit-Auswahl-Dialog offen
    pub fit_selector_open: bool,
    /// Zuletzt im Dialog gewaehlter Fit
    pub chosen_fit: Option<FitId>,
    /// Text der Statuszeile
    pub status: String,
}

/// Gesamter Zustand einer Fit-Session.
pub struct FitState {
    pub data: DataSet,
    pub transform: PlotTransform,
    pub surface: BlitSurface,
    pub drag: DragController,
    /// Aktives Kurven-Tool, falls vorhanden
    pub editor: Option<CurveEditor>,
    /// Abgeschlossene Fits, append-only in Einfuege-Reihenfolge
    pub fits: IndexMap<FitId, FitResult>,
    pub solver: Box<dyn CurveSolver>,
    pub options: FitterOptions,
    pub ui: UiState,
    /// Native Artists der gezeichneten Fit-Linien
    pub fit_artists: Vec<ArtistId>,
    next_fit_id: u64,
}

impl FitState {
    /// Erstellt eine Session ueber dem Datensatz. Die Blit-Pipeline startet
    /// aktiviert mit den Datenpunkten als Hintergrund.
    pub fn new(data: DataSet, options: FitterOptions) -> Self {
        let transform = PlotTransform::fit_to_data(
            data.xdata(),
            data.ydata(),
            Vec2::ZERO,
            Vec2::new(800.0, 600.0),
        );
        let solver: Box<dyn CurveSolver> = Box::new(LevenbergMarquardt::new(LmConfig {
            max_iterations: options.solver_max_iterations,
            tolerance: options.solver_tolerance,
            ..LmConfig::default()
        }));

        let mut drag = DragController::new();
        drag.set_hit_slack(options.point_hit_slack);

        let mut state = Self {
            data,
            transform,
            surface: BlitSurface::new(),
            drag,
            editor: None,
            fits: IndexMap::new(),
            solver,
            options,
            ui: UiState::default(),
            fit_artists: Vec::new(),
            next_fit_id: 0,
        };
        let layer = state.static_layer();
        state.surface.enable(layer);
        state
    }

    /// Statischer Hintergrund-Layer: Datenpunkte, nach Auswahl gefaerbt.
    pub fn static_layer(&self) -> Vec<PlotShape> {
        let mut unselected = Vec::new();
        let mut selected = Vec::new();
        for ((&x, &y), &m) in self
            .data
            .xdata()
            .iter()
            .zip(self.data.ydata())
            .zip(self.data.mask())
        {
            let display = self.transform.data_to_display(glam::DVec2::new(x, y));
            if m {
                selected.push(display);
            } else {
                unselected.push(display);
            }
        }
        let mut layer = Vec::new();
        if !unselected.is_empty() {
            layer.push(PlotShape::Points {
                points: unselected,
                radius: self.options.data_marker_radius,
                color: self.options.data_color,
            });
        }
        if !selected.is_empty() {
            layer.push(PlotShape::Points {
                points: selected,
                radius: self.options.data_marker_radius,
                color: self.options.data_color_selected,
            });
        }
        layer
    }

    /// Baut den Hintergrund nach Auswahl- oder Transform-Aenderung neu.
    pub fn rebuild_static_layer(&mut self) {
        let layer = self.static_layer();
        self.surface.set_static_layer(layer);
    }

    /// Passt das Plot-Rechteck an und projiziert alles neu.
    ///
    /// Ein unveraendertes Rechteck ist ein No-Op, sonst wuerde der
    /// Hintergrund-Cache bei jedem Frame invalidiert.
    pub fn set_viewport(&mut self, origin: Vec2, size: Vec2) {
        if self.transform.screen_origin == origin && self.transform.screen_size == size {
            return;
        }
        self.transform.set_screen_rect(origin, size);
        self.rebuild_static_layer();
        if let Some(editor) = &self.editor {
            editor.refresh(&mut self.surface, &self.drag, &self.transform);
        }
    }

    /// Naechste freie Fit-Kennung.
    pub fn allocate_fit_id(&mut self) -> FitId {
        let id = FitId(self.next_fit_id);
        self.next_fit_id += 1;
        id
    }

    /// Der zuletzt abgeschlossene Fit.
    pub fn get_last_fit(&self) -> Result<&FitResult, FitError> {
        self.fits
            .values()
            .last()
            .ok_or(FitError::NoFitAvailable)
    }

    pub fn get_fit(&self, id: FitId) -> Result<&FitResult, FitError> {
        self.fits.get(&id).ok_or(FitError::NoFitAvailable)
    }

    pub fn has_active_tool(&self) -> bool {
        self.editor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> FitState {
        let data = DataSet::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 2.0, 4.0, 6.0]);
        FitState::new(data, FitterOptions::default())
    }

    #[test]
    fn test_new_session_has_no_fit() {
        let state = session();
        assert_eq!(state.get_last_fit().unwrap_err(), FitError::NoFitAvailable);
        assert!(!state.has_active_tool());
        assert!(state.surface.is_enabled());
    }

    #[test]
    fn test_static_layer_reflects_mask() {
        let mut state = session();
        state.data.set_mask(vec![true, true, false, false]);
        let layer = state.static_layer();
        // Eine Punktwolke pro Auswahl-Zustand
        assert_eq!(layer.len(), 2);
    }

    #[test]
    fn test_unchanged_viewport_keeps_background_cache() {
        let mut state = session();
        state.set_viewport(Vec2::ZERO, Vec2::new(800.0, 600.0));
        state.surface.draw();
        assert!(!state.surface.is_background_stale());

        // Gleiches Rechteck: der eingefrorene Hintergrund bleibt gueltig
        state.set_viewport(Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert!(!state.surface.is_background_stale());

        // Groessenaenderung invalidiert weiterhin
        state.set_viewport(Vec2::ZERO, Vec2::new(400.0, 300.0));
        assert!(state.surface.is_background_stale());
    }

    #[test]
    fn test_fit_ids_are_unique_and_ordered() {
        let mut state = session();
        let a = state.allocate_fit_id();
        let b = state.allocate_fit_id();
        assert_ne!(a, b);
        assert!(a.0 < b.0);
    }
}
