//! Handler für das Abspielen der Kurve mit konstanter Geschwindigkeit.

use crate::app::AppState;
use crate::core::WalkStep;

/// Tastet die Kurve im aktiven Modus ab und startet den Walker.
///
/// Ein laufendes Abspielen wird verworfen.
pub fn start(state: &mut AppState, now: f64) {
    let samples = state
        .curve
        .evaluate_active(state.options.traversal_sample_step);
    let first = samples.first().copied();
    if state.playback.walker.start(samples, now) {
        state.playback.marker = first;
    } else {
        state.playback.marker = None;
    }
}

/// Bricht das Abspielen ab.
pub fn stop(state: &mut AppState) {
    state.playback.walker.stop();
    state.playback.marker = None;
}

/// Bewegt den Marker entsprechend der verstrichenen Zeit.
pub fn advance(state: &mut AppState, now: f64) {
    let velocity = state.options.traversal_velocity;
    match state.playback.walker.advance(now, velocity) {
        Some(WalkStep::Moving(position)) => state.playback.marker = Some(position),
        Some(WalkStep::Finished(_)) | None => state.playback.marker = None,
    }
}
