//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::pick::axis_handle_position;
use crate::core::{Axis, InterpolationMode, TangentHandle};
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let curve = &state.curve;
    let active_index = curve.active_index();

    let mut axis_handles = Vec::new();
    let mut tangent_handles = Vec::new();
    if let Some((index, point)) = active_index.and_then(|i| curve.point(i).map(|p| (i, p))) {
        axis_handles = Axis::ALL
            .into_iter()
            .map(|axis| (axis, axis_handle_position(point, axis)))
            .collect();

        let mode = curve.mode();
        if mode == InterpolationMode::Hermite {
            tangent_handles.push((TangentHandle::Hermite, point.hermite_handle()));
        } else if mode.has_tangent_handles() {
            // Bézier: Vorwärts-Handle nicht am letzten, Rückwärts-Handle nicht am ersten Punkt
            if index + 1 != curve.len() {
                tangent_handles.push((TangentHandle::BezierForward, point.bezier_forward_handle()));
            }
            if index != 0 {
                tangent_handles
                    .push((TangentHandle::BezierBackward, point.bezier_backward_handle()));
            }
        }
    }

    RenderScene {
        control_points: curve.points().iter().map(|p| p.position).collect(),
        active_index,
        mode: curve.mode(),
        polyline: curve.evaluate_active(state.options.sample_step),
        axis_handles,
        tangent_handles,
        playback_marker: state.playback.marker,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Axis, InterpolationMode, TangentHandle};
    use approx::assert_relative_eq;

    fn state_with_points(count: usize) -> AppState {
        let mut state = AppState::new();
        for _ in 0..count {
            state.curve.insert_point();
        }
        state
    }

    #[test]
    fn empty_state_has_no_curve() {
        let scene = build(&AppState::new());
        assert!(!scene.has_curve());
        assert!(scene.axis_handles.is_empty());
    }

    #[test]
    fn active_point_exposes_axis_handles() {
        let mut state = state_with_points(2);
        state.curve.select_point(1);
        let scene = build(&state);
        assert_eq!(scene.active_index, Some(1));
        assert_eq!(scene.axis_handles.len(), 3);
        let (axis, x_handle) = scene.axis_handles[0];
        assert_eq!(axis, Axis::X);
        assert_relative_eq!(x_handle.x, 1.9, epsilon = 1e-6);
        assert_relative_eq!(x_handle.y, 0.0);
        // Linien-Modus hat keine Tangenten-Handles
        assert!(scene.tangent_handles.is_empty());
    }

    #[test]
    fn bezier_endpoints_show_single_handle() {
        let mut state = state_with_points(3);
        state.curve.set_mode(InterpolationMode::Bezier);

        state.curve.select_point(0);
        let kinds: Vec<_> = build(&state).tangent_handles.iter().map(|h| h.0).collect();
        assert_eq!(kinds, vec![TangentHandle::BezierForward]);

        state.curve.select_point(2);
        let kinds: Vec<_> = build(&state).tangent_handles.iter().map(|h| h.0).collect();
        assert_eq!(kinds, vec![TangentHandle::BezierBackward]);

        state.curve.select_point(1);
        assert_eq!(build(&state).tangent_handles.len(), 2);
    }

    #[test]
    fn polyline_uses_configured_step() {
        let mut state = state_with_points(2);
        state.options.sample_step = 0.5;
        assert_eq!(build(&state).polyline.len(), 3);
    }
}
