//! Handler fuer den Fit-Pfad.

use glam::Vec2;

use crate::app::error::FitError;
use crate::app::fit_result::FitResult;
use crate::app::FitState;
use crate::core::PlotShape;

/// Fuehrt einen Fit mit den aktuellen Kontrollpunkten als Startwerten aus.
///
/// Gefittet werden die selektierten Punkte (Fallback: alle); vorhandene
/// y-Fehler gehen als Gewichte ein. Schlaegt der Fit fehl, bleibt die
/// Session unveraendert und der Fehler wird nach oben gereicht.
pub fn request_fit(state: &mut FitState) -> anyhow::Result<()> {
    let editor = state.editor.as_ref().ok_or(FitError::NoActiveTool)?;
    let seed = editor.seed_params(&state.drag, &state.transform);
    let expr = editor.expr().clone();

    let (xs, ys) = state.data.selected_or_all();
    let sigma = state.data.selected_yerr_or_all();
    log::info!(
        "Fit angestossen: {} ueber {} Punkte, Seed {seed:?}",
        expr.describe(),
        xs.len()
    );

    let model = |x: f64, p: &[f64]| expr.eval(x, p);
    let outcome = state
        .solver
        .solve(&model, &xs, &ys, &seed, sigma.as_deref())?;

    if !outcome.is_success() {
        log::warn!("Fit fehlgeschlagen: {}", outcome.message);
        return Err(FitError::NoConvergence {
            message: outcome.message,
        }
        .into());
    }

    let message = outcome.message.clone();
    let result = FitResult::new(state.data.clone(), expr, outcome);

    // Fit-Linie als nativen Artist zeichnen; die Pipeline ist dabei
    // pausiert und friert den Hintergrund anschliessend neu ein
    let curve = result.fit_curve(state.options.preview_samples);
    let points: Vec<Vec2> = curve
        .iter()
        .filter(|p| p.y.is_finite())
        .map(|p| state.transform.data_to_display(*p))
        .collect();
    let shape =
        PlotShape::dashed_polyline(points, state.options.fit_stroke_width, state.options.fit_color);
    let artist = {
        let mut pause = state.surface.scoped_disable();
        let surface = pause.surface();
        let artist = surface.add_native();
        surface.set_shape(artist, shape);
        artist
    };
    state.fit_artists.push(artist);

    let id = state.allocate_fit_id();
    state.fits.insert(id, result);
    state.ui.status = message;
    Ok(())
}
