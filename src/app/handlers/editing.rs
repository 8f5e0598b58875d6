//! Handler für Punkt-Einfügen und Moduswechsel.

use crate::app::AppState;
use crate::core::InterpolationMode;

/// Hängt einen Kontrollpunkt an die Kurve an.
pub fn insert_point(state: &mut AppState) {
    state.curve.insert_point();
}

/// Wechselt den Interpolationsmodus; ein laufendes Abspielen bleibt auf
/// der beim Start abgetasteten Polyline.
pub fn set_mode(state: &mut AppState, mode: InterpolationMode) {
    state.curve.set_mode(mode);
}
