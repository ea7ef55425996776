//! Kurven-Editor: verbindet Modellbaum, Kontrollpunkte und Zeichenflaeche.
//!
//! Pro Blatt des Modellbaums werden zwei Kontrollpunkte angelegt. Jede
//! Punktbewegung leitet die Parameter des betroffenen Blatts neu ab und
//! zeichnet die Preview des gesamten Modells neu. Einschraenkungen
//! (Halbwertspunkt des Lorentz-Profils) werden in Daten-Koordinaten
//! angewendet, bevor die Position committed wird.

use glam::DVec2;

use super::blit::{ArtistId, BlitSurface};
use super::drag::{DragCommit, DragController, ObserverToken};
use super::point::PointId;
use crate::core::{PlotShape, PlotTransform};
use crate::curves::{CurveKind, ModelExpr, Restriction, PREVIEW_SAMPLES};
use crate::shared::FitterOptions;

/// Bindung eines Modellblatts an seine zwei Kontrollpunkte.
#[derive(Debug, Clone)]
struct LeafBinding {
    kind: CurveKind,
    /// Punkt 1 und Punkt 2 in Ableitungs-Reihenfolge
    points: [PointId; 2],
    /// Einschraenkung fuer Punkt 2 (Referenz: Punkt 1)
    restriction: Option<Restriction>,
}

/// Aktiver Editor fuer ein (zusammengesetztes) Modell.
#[derive(Debug)]
pub struct CurveEditor {
    expr: ModelExpr,
    bindings: Vec<LeafBinding>,
    tokens: Vec<(PointId, ObserverToken)>,
    curve_artist: ArtistId,
    point_artist: ArtistId,
    /// x-Bereich der Daten (Sampling-Fenster zusammengesetzter Modelle)
    data_x_range: (f64, f64),
    /// Anzahl der Datenpunkte (Sampling-Dichte zusammengesetzter Modelle)
    data_len: usize,
    preview_samples: usize,
    stroke_width: f32,
    curve_color: [f32; 4],
    point_color: [f32; 4],
    point_radius: f32,
}

impl CurveEditor {
    /// Legt Kontrollpunkte und Artists fuer das Modell an.
    ///
    /// Blaetter werden gegeneinander versetzt platziert, damit gestapelte
    /// Terme nicht auf identischen Punkten starten.
    pub fn create(
        expr: ModelExpr,
        surface: &mut BlitSurface,
        drag: &mut DragController,
        transform: &PlotTransform,
        data_x_range: (f64, f64),
        data_len: usize,
        options: &FitterOptions,
    ) -> Self {
        let mut bindings = Vec::new();
        let mut tokens = Vec::new();

        for (i, kind) in expr.leaves().into_iter().enumerate() {
            let model = kind.model();
            let fractions = model.default_point_fractions();
            let offset = 0.05 * i as f32;
            let mut ids = [PointId(0); 2];
            for (slot, (fx, fy)) in fractions.into_iter().enumerate() {
                let display = transform.axes_fraction_to_display(fx + offset, fy + offset);
                let id = drag.add_point(display, options.point_radius, options.point_color);
                tokens.push((id, drag.connect(id)));
                ids[slot] = id;
            }
            bindings.push(LeafBinding {
                kind,
                points: ids,
                restriction: model.secondary_restriction(),
            });
        }

        let mut editor = Self {
            expr,
            bindings,
            tokens,
            curve_artist: surface.add_dynamic(),
            point_artist: surface.add_dynamic(),
            data_x_range,
            data_len,
            preview_samples: options.preview_samples,
            stroke_width: options.preview_stroke_width,
            curve_color: options.preview_color,
            point_color: options.point_color,
            point_radius: options.point_radius,
        };
        // Einschraenkungen gelten schon fuer die Startplatzierung
        editor.apply_initial_restrictions(drag, transform);
        editor.refresh(surface, drag, transform);
        editor
    }

    /// Entfernt Punkte, Beobachter und Artists wieder.
    pub fn destroy(self, surface: &mut BlitSurface, drag: &mut DragController) {
        for (id, token) in &self.tokens {
            drag.disconnect(*id, *token);
        }
        for binding in &self.bindings {
            for id in binding.points {
                drag.remove_point(id);
            }
        }
        surface.remove(self.curve_artist);
        surface.remove(self.point_artist);
    }

    pub fn expr(&self) -> &ModelExpr {
        &self.expr
    }

    /// Ob der Punkt zu diesem Editor gehoert.
    pub fn owns_point(&self, id: PointId) -> bool {
        self.bindings.iter().any(|b| b.points.contains(&id))
    }

    /// Aktuelle Parameter aus den Punktpositionen, links-praefix
    /// konkateniert in Blatt-Reihenfolge.
    pub fn seed_params(&self, drag: &DragController, transform: &PlotTransform) -> Vec<f64> {
        let mut params = Vec::with_capacity(self.expr.param_count());
        for binding in &self.bindings {
            let p1 = self.data_pos(drag, transform, binding.points[0]);
            let p2 = self.data_pos(drag, transform, binding.points[1]);
            params.extend(binding.kind.model().derive_params(p1, p2));
        }
        params
    }

    /// Verarbeitet einen Drag-Commit: Einschraenkung anwenden, dann die
    /// Preview neu zeichnen. Commits fremder Punkte sind ein No-Op.
    pub fn handle_commit(
        &self,
        commit: &DragCommit,
        surface: &mut BlitSurface,
        drag: &mut DragController,
        transform: &PlotTransform,
    ) {
        if !self.owns_point(commit.point) {
            return;
        }
        self.apply_restriction(commit.point, drag, transform);
        self.refresh(surface, drag, transform);
    }

    /// Zeichnet Preview-Kurve und Kontrollpunkte auf die Zeichenflaeche.
    pub fn refresh(
        &self,
        surface: &mut BlitSurface,
        drag: &DragController,
        transform: &PlotTransform,
    ) {
        surface.set_shape(self.curve_artist, self.preview_shape(drag, transform));

        let markers = self
            .bindings
            .iter()
            .flat_map(|b| b.points)
            .filter_map(|id| drag.point(id))
            .map(|p| p.display)
            .collect();
        surface.set_shape(
            self.point_artist,
            PlotShape::Points {
                points: markers,
                radius: self.point_radius,
                color: self.point_color,
            },
        );
    }

    // ── Intern ───────────────────────────────────────────────────────

    fn data_pos(&self, drag: &DragController, transform: &PlotTransform, id: PointId) -> DVec2 {
        drag.point(id)
            .map(|p| transform.display_to_data(p.display))
            .unwrap_or(DVec2::ZERO)
    }

    fn apply_initial_restrictions(&self, drag: &mut DragController, transform: &PlotTransform) {
        let secondary: Vec<PointId> = self
            .bindings
            .iter()
            .filter(|b| b.restriction.is_some())
            .map(|b| b.points[1])
            .collect();
        for id in secondary {
            self.apply_restriction(id, drag, transform);
        }
    }

    /// Klemmt die Position des Punkts gemaess Blatt-Einschraenkung, in
    /// Daten-Koordinaten. Punkte ohne Einschraenkung bleiben unberuehrt.
    fn apply_restriction(&self, id: PointId, drag: &mut DragController, transform: &PlotTransform) {
        let Some(binding) = self
            .bindings
            .iter()
            .find(|b| b.points[1] == id && b.restriction.is_some())
        else {
            return;
        };
        let restriction = binding.restriction.unwrap();
        let reference = self.data_pos(drag, transform, binding.points[0]);
        let proposed = self.data_pos(drag, transform, id);
        let clamped = restriction.apply(reference, proposed);
        drag.set_position(id, transform.data_to_display(clamped));
    }

    /// Baut die Preview-Polyline.
    ///
    /// Einzelkurven sampeln ihr eigenes Fenster um die zwei Punkte;
    /// zusammengesetzte Modelle sampeln den x-Bereich der Daten mit
    /// `min(3n, 250)` Stuetzstellen. Nicht-finite Werte fallen raus.
    fn preview_shape(&self, drag: &DragController, transform: &PlotTransform) -> PlotShape {
        let params = self.seed_params(drag, transform);
        let ((lo, hi), samples) = if self.expr.is_leaf() {
            let binding = &self.bindings[0];
            let p1 = self.data_pos(drag, transform, binding.points[0]);
            let p2 = self.data_pos(drag, transform, binding.points[1]);
            (
                binding.kind.model().preview_window(p1, p2),
                self.preview_samples,
            )
        } else {
            (
                self.data_x_range,
                (3 * self.data_len).min(PREVIEW_SAMPLES).max(2),
            )
        };

        let step = (hi - lo) / (samples.saturating_sub(1).max(1)) as f64;
        let points = (0..samples)
            .filter_map(|i| {
                let x = lo + step * i as f64;
                let y = self.expr.eval(x, &params);
                y.is_finite()
                    .then(|| transform.data_to_display(DVec2::new(x, y)))
            })
            .collect();
        PlotShape::solid_polyline(points, self.stroke_width, self.curve_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::CombineOp;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn setup() -> (BlitSurface, DragController, PlotTransform, FitterOptions) {
        let transform = PlotTransform::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
            Vec2::ZERO,
            Vec2::new(100.0, 100.0),
        );
        let mut surface = BlitSurface::new();
        surface.enable(vec![]);
        (surface, DragController::new(), transform, FitterOptions::default())
    }

    fn place(drag: &mut DragController, transform: &PlotTransform, id: PointId, data: DVec2) {
        drag.set_position(id, transform.data_to_display(data));
    }

    #[test]
    fn test_create_places_two_points_per_leaf() {
        let (mut surface, mut drag, transform, opts) = setup();
        let expr = ModelExpr::combine(
            CombineOp::Add,
            ModelExpr::leaf(CurveKind::Line),
            ModelExpr::leaf(CurveKind::Gaussian),
        );
        let editor =
            CurveEditor::create(expr, &mut surface, &mut drag, &transform, (0.0, 10.0), 20, &opts);
        assert_eq!(drag.points().count(), 4);
        // Kurven-Artist und Punkt-Artist
        assert_eq!(surface.artist_count(), 2);
        for p in drag.points() {
            assert!(editor.owns_point(p.id));
        }
    }

    #[test]
    fn test_seed_params_follow_point_positions() {
        let (mut surface, mut drag, transform, opts) = setup();
        let editor = CurveEditor::create(
            ModelExpr::leaf(CurveKind::Line),
            &mut surface,
            &mut drag,
            &transform,
            (0.0, 10.0),
            20,
            &opts,
        );
        let ids: Vec<PointId> = drag.points().map(|p| p.id).collect();
        place(&mut drag, &transform, ids[0], DVec2::new(1.0, 2.0));
        place(&mut drag, &transform, ids[1], DVec2::new(3.0, 6.0));

        let params = editor.seed_params(&drag, &transform);
        assert_relative_eq!(params[0], 2.0, epsilon = 1e-3);
        assert_relative_eq!(params[1], 0.0, epsilon = 1e-2);
    }

    #[test]
    fn test_lorentz_side_point_is_clamped_to_half_maximum() {
        let (mut surface, mut drag, transform, opts) = setup();
        let editor = CurveEditor::create(
            ModelExpr::leaf(CurveKind::Lorentzian),
            &mut surface,
            &mut drag,
            &transform,
            (0.0, 10.0),
            20,
            &opts,
        );
        let ids: Vec<PointId> = drag.points().map(|p| p.id).collect();
        place(&mut drag, &transform, ids[0], DVec2::new(5.0, 8.0));

        // Punkt 2 auf eine beliebige Hoehe bewegen
        let proposed = transform.data_to_display(DVec2::new(7.0, 6.5));
        drag.set_position(ids[1], proposed);
        let commit = DragCommit {
            point: ids[1],
            display_pos: proposed,
            observers: vec![],
        };
        editor.handle_commit(&commit, &mut surface, &mut drag, &transform);

        let clamped = transform.display_to_data(drag.point(ids[1]).unwrap().display);
        assert_relative_eq!(clamped.y, 4.0, epsilon = 1e-2);
        assert_relative_eq!(clamped.x, 7.0, epsilon = 1e-2);
    }

    #[test]
    fn test_composite_preview_samples_data_range() {
        let (mut surface, mut drag, transform, opts) = setup();
        let expr = ModelExpr::combine(
            CombineOp::Add,
            ModelExpr::leaf(CurveKind::Line),
            ModelExpr::leaf(CurveKind::Line),
        );
        let editor =
            CurveEditor::create(expr, &mut surface, &mut drag, &transform, (2.0, 8.0), 4, &opts);
        editor.refresh(&mut surface, &drag, &transform);

        let frame = surface.draw();
        let polyline = frame
            .iter()
            .find_map(|s| match s {
                PlotShape::Polyline { points, .. } => Some(points),
                _ => None,
            })
            .unwrap();
        // min(3*4, 250) Stuetzstellen ueber [2, 8]
        assert_eq!(polyline.len(), 12);
        let first = transform.display_to_data(polyline[0]);
        let last = transform.display_to_data(*polyline.last().unwrap());
        assert_relative_eq!(first.x, 2.0, epsilon = 1e-2);
        assert_relative_eq!(last.x, 8.0, epsilon = 1e-2);
    }

    #[test]
    fn test_destroy_removes_points_and_artists() {
        let (mut surface, mut drag, transform, opts) = setup();
        let editor = CurveEditor::create(
            ModelExpr::leaf(CurveKind::Sine),
            &mut surface,
            &mut drag,
            &transform,
            (0.0, 10.0),
            20,
            &opts,
        );
        editor.destroy(&mut surface, &mut drag);
        assert_eq!(drag.points().count(), 0);
        assert_eq!(surface.artist_count(), 0);
    }
}
