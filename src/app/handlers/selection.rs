//! Handler für Picking und Handle-Drags.

use crate::app::AppState;
use crate::core::Ray;
use glam::Vec3;

/// Wertet einen Pointer-Down nach Pick-Priorität aus.
pub fn pick_at(state: &mut AppState, ray: &Ray) {
    state.curve.pointer_down(ray);
}

/// Zieht das gegriffene Achsen- oder Tangenten-Handle.
pub fn drag_active_handle(state: &mut AppState, ray: &Ray, view_direction: Vec3) {
    state.curve.pointer_drag(ray, view_direction);
}

/// Löst das gegriffene Handle; der Punkt bleibt aktiv.
pub fn release_handle(state: &mut AppState) {
    state.curve.pointer_up();
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    state.curve.clear_selection();
}
