//! End-to-End-Tests: Commands durch den Controller treiben,
//! von Tool-Aktivierung ueber Drag bis zum Fit.

use approx::assert_relative_eq;
use glam::{DVec2, Vec2};
use kurvenfit::{
    CombineOp, CurveKind, CurveSolver, DataSet, FitCommand, FitController, FitError, FitState,
    FitterOptions, ModelExpr, SolveOutcome, SolverError, SolverFlag,
};

fn linear_session() -> (FitController, FitState) {
    // y = 2x, exakt
    let xs: Vec<f64> = (0..5).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x).collect();
    let state = FitState::new(DataSet::new(xs, ys), FitterOptions::default());
    (FitController::new(), state)
}

fn gaussian_session() -> (FitController, FitState) {
    // Gauss mit A=10, m=5, s=2 plus deterministischem Kleinst-Rauschen
    let xs: Vec<f64> = (0..100).map(|i| i as f64 * 0.12).collect();
    let ys: Vec<f64> = xs
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            10.0 * (-0.5 * (x - 5.0) * (x - 5.0) / 4.0).exp()
                + 0.005 * ((i * 13 % 11) as f64 - 5.0)
        })
        .collect();
    let state = FitState::new(DataSet::new(xs, ys), FitterOptions::default());
    (FitController::new(), state)
}

/// Setzt einen Kontrollpunkt des aktiven Tools auf eine Daten-Koordinate.
fn drag_point_to(controller: &mut FitController, state: &mut FitState, index: usize, data: DVec2) {
    let id = {
        let mut ids: Vec<_> = state.drag.points().map(|p| p.id).collect();
        ids.sort();
        ids[index]
    };
    let start = state.drag.point(id).unwrap().display;
    let target = state.transform.data_to_display(data);

    controller
        .handle_command(state, FitCommand::PointDragStarted { pos: start })
        .unwrap();
    assert_eq!(state.drag.dragging(), Some(id), "Punkt nicht gegriffen");
    controller
        .handle_command(state, FitCommand::PointDragMoved { pos: target })
        .unwrap();
    controller
        .handle_command(state, FitCommand::PointDragEnded)
        .unwrap();
}

#[test]
fn test_enable_tool_creates_two_points_and_preview() {
    let (mut controller, mut state) = linear_session();
    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Line })
        .unwrap();

    assert!(state.has_active_tool());
    assert_eq!(state.drag.points().count(), 2);
    // Preview-Kurve und Punkt-Marker
    assert_eq!(state.surface.artist_count(), 2);
}

#[test]
fn test_disable_tool_cleans_up() {
    let (mut controller, mut state) = linear_session();
    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Sine })
        .unwrap();
    controller
        .handle_command(&mut state, FitCommand::DisableTool)
        .unwrap();

    assert!(!state.has_active_tool());
    assert_eq!(state.drag.points().count(), 0);
    assert_eq!(state.surface.artist_count(), 0);
}

#[test]
fn test_line_fit_recovers_slope_two() {
    // Gerade durch (1,2) und (3,6) ziehen und fitten: m=2, n=0
    let (mut controller, mut state) = linear_session();
    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Line })
        .unwrap();
    drag_point_to(&mut controller, &mut state, 0, DVec2::new(1.0, 2.1));
    drag_point_to(&mut controller, &mut state, 1, DVec2::new(3.0, 6.1));

    controller
        .handle_command(&mut state, FitCommand::RequestFit)
        .unwrap();

    let fit = state.get_last_fit().unwrap();
    assert_relative_eq!(fit.params()[0], 2.0, epsilon = 1e-6);
    assert_relative_eq!(fit.params()[1], 0.0, epsilon = 1e-6);
    assert!(fit.message().contains("konvergiert"));
}

#[test]
fn test_gaussian_fit_recovers_peak_parameters() {
    let (mut controller, mut state) = gaussian_session();
    controller
        .handle_command(
            &mut state,
            FitCommand::EnableTool {
                kind: CurveKind::Gaussian,
            },
        )
        .unwrap();
    // Peak ungefaehr auf den Datenberg, Seitenpunkt daneben
    drag_point_to(&mut controller, &mut state, 0, DVec2::new(5.2, 9.0));
    drag_point_to(&mut controller, &mut state, 1, DVec2::new(7.5, 4.0));

    controller
        .handle_command(&mut state, FitCommand::RequestFit)
        .unwrap();

    let fit = state.get_last_fit().unwrap();
    assert_relative_eq!(fit.params()[0], 10.0, epsilon = 0.1);
    assert_relative_eq!(fit.params()[1], 5.0, epsilon = 0.1);
    assert_relative_eq!(fit.params()[2].abs(), 2.0, epsilon = 0.1);
}

#[test]
fn test_empty_selection_fits_all_points() {
    // Leere Maske: der Fit nimmt trotzdem alle 5 Punkte
    let (mut controller, mut state) = linear_session();
    controller
        .handle_command(&mut state, FitCommand::ClearSelection)
        .unwrap();
    assert_eq!(state.data.selected_count(), 0);

    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Line })
        .unwrap();
    drag_point_to(&mut controller, &mut state, 0, DVec2::new(1.0, 2.0));
    drag_point_to(&mut controller, &mut state, 1, DVec2::new(3.0, 6.0));
    controller
        .handle_command(&mut state, FitCommand::RequestFit)
        .unwrap();

    let fit = state.get_last_fit().unwrap();
    assert_eq!(fit.residuals().len(), 5);
}

#[test]
fn test_selection_mask_restricts_fit_data() {
    let (mut controller, mut state) = linear_session();
    controller
        .handle_command(
            &mut state,
            FitCommand::SetSelectionMask {
                mask: vec![true, true, true, false, false],
            },
        )
        .unwrap();
    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Line })
        .unwrap();
    drag_point_to(&mut controller, &mut state, 0, DVec2::new(0.0, 0.0));
    drag_point_to(&mut controller, &mut state, 1, DVec2::new(2.0, 4.0));
    controller
        .handle_command(&mut state, FitCommand::RequestFit)
        .unwrap();

    assert_eq!(state.get_last_fit().unwrap().residuals().len(), 3);
}

#[test]
fn test_point_hit_slack_option_widens_grab_range() {
    let xs: Vec<f64> = (0..5).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x).collect();
    let options = FitterOptions {
        point_hit_slack: 100.0,
        ..FitterOptions::default()
    };
    let mut state = FitState::new(DataSet::new(xs, ys), options);
    let mut controller = FitController::new();

    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Line })
        .unwrap();
    let point = state.drag.points().next().unwrap();
    let far = point.display + Vec2::new(100.0, 0.0);

    // Radius 5, Slack 100: 100 px daneben greift noch
    controller
        .handle_command(&mut state, FitCommand::PointDragStarted { pos: far })
        .unwrap();
    assert!(state.drag.dragging().is_some());
}

#[test]
fn test_key_press_is_accepted_without_effect() {
    let (mut controller, mut state) = linear_session();
    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Line })
        .unwrap();
    let points_before: Vec<_> = state.drag.points().cloned().collect();

    controller
        .handle_command(&mut state, FitCommand::KeyPressed)
        .unwrap();

    assert!(state.has_active_tool());
    assert!(state.fits.is_empty());
    let points_after: Vec<_> = state.drag.points().cloned().collect();
    assert_eq!(points_after, points_before);
}

#[test]
fn test_fit_without_tool_is_rejected() {
    let (mut controller, mut state) = linear_session();
    let err = controller
        .handle_command(&mut state, FitCommand::RequestFit)
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<FitError>(),
        Some(&FitError::NoActiveTool)
    );
    assert!(state.fits.is_empty());
}

/// Solver-Stub, der nie konvergiert.
struct FailingSolver;

impl CurveSolver for FailingSolver {
    fn solve(
        &self,
        _model: &dyn Fn(f64, &[f64]) -> f64,
        x: &[f64],
        _y: &[f64],
        seed: &[f64],
        _sigma: Option<&[f64]>,
    ) -> Result<SolveOutcome, SolverError> {
        Ok(SolveOutcome {
            params: seed.to_vec(),
            covariance: vec![vec![f64::NAN; seed.len()]; seed.len()],
            residuals: vec![0.0; x.len()],
            nfev: 1,
            message: "Iterationslimit erreicht".to_string(),
            flag: SolverFlag::MaxIterationsReached,
        })
    }
}

#[test]
fn test_failed_fit_leaves_session_untouched() {
    let (mut controller, mut state) = linear_session();
    state.solver = Box::new(FailingSolver);
    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Line })
        .unwrap();
    let artists_before = state.surface.artist_count();

    let err = controller
        .handle_command(&mut state, FitCommand::RequestFit)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FitError>(),
        Some(FitError::NoConvergence { .. })
    ));
    assert!(state.fits.is_empty());
    assert_eq!(state.surface.artist_count(), artists_before);
    assert!(state.fit_artists.is_empty());
}

#[test]
fn test_composite_line_plus_line_evaluates_sum() {
    // Zwei Geraden-Terme: (1,0) und (0,5), bei x=10 muss 15 herauskommen
    let (mut controller, mut state) = linear_session();
    let expr = ModelExpr::combine(
        CombineOp::Add,
        ModelExpr::leaf(CurveKind::Line),
        ModelExpr::leaf(CurveKind::Line),
    );
    controller
        .handle_command(&mut state, FitCommand::EnableCompositeTool { expr: expr.clone() })
        .unwrap();
    assert_eq!(state.drag.points().count(), 4);

    // Term 1: Steigung 1, Achsenabschnitt 0
    drag_point_to(&mut controller, &mut state, 0, DVec2::new(0.0, 0.0));
    drag_point_to(&mut controller, &mut state, 1, DVec2::new(1.0, 1.0));
    // Term 2: Steigung 0, Achsenabschnitt 5
    drag_point_to(&mut controller, &mut state, 2, DVec2::new(0.0, 5.0));
    drag_point_to(&mut controller, &mut state, 3, DVec2::new(2.0, 5.0));

    let editor = state.editor.as_ref().unwrap();
    let params = editor.seed_params(&state.drag, &state.transform);
    assert_relative_eq!(expr.eval(10.0, &params), 15.0, epsilon = 0.05);
}

#[test]
fn test_second_fit_appends_instead_of_replacing() {
    let (mut controller, mut state) = linear_session();
    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Line })
        .unwrap();
    drag_point_to(&mut controller, &mut state, 0, DVec2::new(1.0, 2.0));
    drag_point_to(&mut controller, &mut state, 1, DVec2::new(3.0, 6.0));

    controller
        .handle_command(&mut state, FitCommand::RequestFit)
        .unwrap();
    controller
        .handle_command(&mut state, FitCommand::RequestFit)
        .unwrap();

    assert_eq!(state.fits.len(), 2);
    assert_eq!(state.fit_artists.len(), 2);
}

#[test]
fn test_modal_fit_selector_drains_other_commands() {
    let (mut controller, mut state) = linear_session();
    controller
        .handle_command(&mut state, FitCommand::EnableTool { kind: CurveKind::Line })
        .unwrap();
    drag_point_to(&mut controller, &mut state, 0, DVec2::new(1.0, 2.0));
    drag_point_to(&mut controller, &mut state, 1, DVec2::new(3.0, 6.0));
    controller
        .handle_command(&mut state, FitCommand::RequestFit)
        .unwrap();

    controller
        .handle_command(&mut state, FitCommand::OpenFitSelector)
        .unwrap();
    assert!(state.ui.fit_selector_open);

    // Waehrend der Dialog offen ist, werden andere Commands verworfen
    controller
        .handle_command(&mut state, FitCommand::DisableTool)
        .unwrap();
    assert!(state.has_active_tool());

    let id = *state.fits.keys().next().unwrap();
    controller
        .handle_command(&mut state, FitCommand::ChooseFit { id })
        .unwrap();
    assert!(!state.ui.fit_selector_open);
    assert_eq!(state.ui.chosen_fit, Some(id));

    // Danach laufen Commands wieder normal durch
    controller
        .handle_command(&mut state, FitCommand::DisableTool)
        .unwrap();
    assert!(!state.has_active_tool());
}

#[test]
fn test_get_last_fit_without_fit_is_explicit_error() {
    let (_, state) = linear_session();
    assert_eq!(state.get_last_fit().unwrap_err(), FitError::NoFitAvailable);
}
