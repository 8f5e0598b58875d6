//! Picking: Auflösung von Strahl-Treffern auf Kontrollpunkte und Handles.
//!
//! Priorität bei einem Pointer-Down:
//! 1. Achsen-Handle des aktiven Punkts
//! 2. Tangenten-Handle des aktiven Punkts
//! 3. Beliebiger Kontrollpunkt

use super::{ControlPoint, InterpolationMode, Ray};
use crate::shared::options::{
    AXIS_HANDLE_OFFSET, AXIS_HANDLE_PICK_RADIUS, POINT_PICK_RADIUS, TANGENT_HANDLE_HALF_EXTENT,
};
use glam::Vec3;

/// Koordinatenachse eines Verschiebe-Handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Alle Achsen in Pick-Priorität.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Einheitsvektor der Achse.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Komponenten-Index (0 = x, 1 = y, 2 = z).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Welches Tangenten-Handle gegriffen ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TangentHandle {
    Hermite,
    BezierForward,
    BezierBackward,
}

/// Ein gegriffenes Handle des aktiven Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabbedHandle {
    Axis(Axis),
    Tangent(TangentHandle),
}

/// Selektions-Zustandsmaschine: Idle → PointSelected → HandleGrabbed → Idle.
///
/// Ein gegriffenes Handle ohne aktiven Punkt ist nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickState {
    #[default]
    Idle,
    PointSelected {
        index: usize,
    },
    HandleGrabbed {
        index: usize,
        handle: GrabbedHandle,
    },
}

impl PickState {
    /// Index des aktiven Punkts, falls vorhanden.
    pub fn active_index(&self) -> Option<usize> {
        match *self {
            PickState::Idle => None,
            PickState::PointSelected { index } | PickState::HandleGrabbed { index, .. } => {
                Some(index)
            }
        }
    }

    /// Gegriffenes Handle, falls vorhanden.
    pub fn grabbed_handle(&self) -> Option<GrabbedHandle> {
        match *self {
            PickState::HandleGrabbed { handle, .. } => Some(handle),
            _ => None,
        }
    }

    /// Löst ein gegriffenes Handle; der Punkt bleibt selektiert.
    pub fn released(self) -> Self {
        match self {
            PickState::HandleGrabbed { index, .. } => PickState::PointSelected { index },
            other => other,
        }
    }
}

/// Weltposition des Achsen-Handles eines Punkts.
pub fn axis_handle_position(point: &ControlPoint, axis: Axis) -> Vec3 {
    point.position + AXIS_HANDLE_OFFSET * axis.unit()
}

/// Erster getroffener Kontrollpunkt in Einfüge-Reihenfolge (kein Nearest-Hit).
pub fn resolve_point_hit(points: &[ControlPoint], ray: &Ray) -> Option<usize> {
    points
        .iter()
        .position(|p| ray.intersects_sphere(p.position, POINT_PICK_RADIUS))
}

/// Getroffenes Achsen-Handle des aktiven Punkts (Priorität X, Y, Z).
pub fn resolve_axis_handle_hit(
    points: &[ControlPoint],
    ray: &Ray,
    active_index: Option<usize>,
) -> Option<Axis> {
    let point = points.get(active_index?)?;
    Axis::ALL.into_iter().find(|&axis| {
        ray.intersects_sphere(axis_handle_position(point, axis), AXIS_HANDLE_PICK_RADIUS)
    })
}

/// Getroffenes Tangenten-Handle des aktiven Punkts für den aktuellen Modus.
///
/// Im Bézier-Modus wird das Vorwärts-Handle zuerst geprüft.
pub fn resolve_tangent_handle_hit(
    points: &[ControlPoint],
    ray: &Ray,
    active_index: Option<usize>,
    mode: InterpolationMode,
) -> Option<TangentHandle> {
    let point = points.get(active_index?)?;
    let candidates: Vec<(TangentHandle, Vec3)> = match mode {
        InterpolationMode::Hermite => vec![(TangentHandle::Hermite, point.hermite_tangent)],
        InterpolationMode::Bezier => vec![
            (TangentHandle::BezierForward, point.bezier_forward),
            (TangentHandle::BezierBackward, point.bezier_backward),
        ],
        InterpolationMode::Line | InterpolationMode::Parabola => Vec::new(),
    };
    let half = Vec3::splat(TANGENT_HANDLE_HALF_EXTENT);
    candidates
        .into_iter()
        .find(|(_, tangent)| {
            let center = point.position + *tangent;
            ray.intersects_aabb(center - half, center + half)
        })
        .map(|(handle, _)| handle)
}

/// Schnitt des Strahls mit der Drag-Ebene eines Achsen-Handles.
///
/// X und Y ziehen beide in der Ebene `z = position.z`, Z in der Ebene
/// `y = position.y`. Gibt `None` bei Strahl parallel zur Ebene.
pub fn drag_plane_intersection(point: &ControlPoint, ray: &Ray, axis: Axis) -> Option<Vec3> {
    let normal = match axis {
        Axis::X | Axis::Y => Vec3::Z,
        Axis::Z => Vec3::Y,
    };
    ray.plane_intersection(point.position, normal)
}

/// Wertet einen Pointer-Down nach Priorität aus und liefert den neuen Zustand.
///
/// Ein bereits gegriffenes Handle bleibt gegriffen.
pub fn resolve_pointer_down(
    points: &[ControlPoint],
    mode: InterpolationMode,
    state: PickState,
    ray: &Ray,
) -> PickState {
    if let PickState::HandleGrabbed { .. } = state {
        return state;
    }
    let active = state.active_index().filter(|&i| i < points.len());

    if let Some(index) = active {
        if let Some(axis) = resolve_axis_handle_hit(points, ray, Some(index)) {
            return PickState::HandleGrabbed {
                index,
                handle: GrabbedHandle::Axis(axis),
            };
        }
        if let Some(tangent) = resolve_tangent_handle_hit(points, ray, Some(index), mode) {
            return PickState::HandleGrabbed {
                index,
                handle: GrabbedHandle::Tangent(tangent),
            };
        }
    }

    match resolve_point_hit(points, ray) {
        Some(index) => PickState::PointSelected { index },
        None => PickState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn three_points() -> Vec<ControlPoint> {
        (0..3)
            .map(|i| ControlPoint::new(Vec3::new(i as f32, 0.0, 0.0)))
            .collect()
    }

    /// Strahl von vorne (+Z) senkrecht auf `target`.
    fn ray_at(target: Vec3) -> Ray {
        Ray::new(target + Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z)
    }

    #[test]
    fn point_hit_returns_first_in_list_order() {
        let mut points = three_points();
        // Zwei Punkte hintereinander auf demselben Strahl
        points[2].position = Vec3::new(1.0, 0.0, -3.0);
        let hit = resolve_point_hit(&points, &ray_at(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn point_miss_returns_none() {
        let points = three_points();
        assert_eq!(resolve_point_hit(&points, &ray_at(Vec3::new(0.5, 0.5, 0.0))), None);
    }

    #[test]
    fn axis_handles_skipped_without_active_point() {
        let points = three_points();
        let ray = ray_at(Vec3::new(0.9, 0.0, 0.0));
        assert_eq!(resolve_axis_handle_hit(&points, &ray, None), None);
        assert_eq!(resolve_axis_handle_hit(&points, &ray, Some(0)), Some(Axis::X));
    }

    #[test]
    fn axis_priority_prefers_x_over_y() {
        let points = vec![ControlPoint::new(Vec3::ZERO)];
        // Diagonaler Strahl, der erst das Y- und dann das X-Handle trifft
        let ray = Ray::new(Vec3::new(-1.0, 2.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        assert!(ray.intersects_sphere(Vec3::new(0.0, 0.9, 0.0), 0.2));
        assert!(ray.intersects_sphere(Vec3::new(0.9, 0.0, 0.0), 0.2));
        assert_eq!(resolve_axis_handle_hit(&points, &ray, Some(0)), Some(Axis::X));
    }

    #[test]
    fn tangent_hit_depends_on_mode() {
        let points = three_points();
        // Hermite-Tangente (0, 1.5, 0) am Punkt 1
        let ray = ray_at(Vec3::new(1.0, 1.5, 0.0));
        assert_eq!(
            resolve_tangent_handle_hit(&points, &ray, Some(1), InterpolationMode::Hermite),
            Some(TangentHandle::Hermite)
        );
        assert_eq!(
            resolve_tangent_handle_hit(&points, &ray, Some(1), InterpolationMode::Line),
            None
        );
    }

    #[test]
    fn bezier_backward_handle_is_found() {
        let points = three_points();
        // Rückwärts-Handle (0, -1, -1) am Punkt 1 → (1, -1, -1)
        let ray = ray_at(Vec3::new(1.0, -1.0, -1.0));
        assert_eq!(
            resolve_tangent_handle_hit(&points, &ray, Some(1), InterpolationMode::Bezier),
            Some(TangentHandle::BezierBackward)
        );
    }

    #[test]
    fn axis_handle_wins_over_other_point() {
        let mut points = three_points();
        // Punkt 1 liegt genau auf dem X-Handle von Punkt 0
        points[1].position = Vec3::new(0.9, 0.0, 0.0);
        let ray = ray_at(Vec3::new(0.9, 0.0, 0.0));
        let state = resolve_pointer_down(
            &points,
            InterpolationMode::Line,
            PickState::PointSelected { index: 0 },
            &ray,
        );
        assert_eq!(
            state,
            PickState::HandleGrabbed {
                index: 0,
                handle: GrabbedHandle::Axis(Axis::X)
            }
        );
    }

    #[test]
    fn axis_handle_wins_over_tangent_handle() {
        let points = vec![ControlPoint::new(Vec3::ZERO)];
        // Von oben: trifft Hermite-Box (0, 1.5, 0) und Y-Handle (0, 0.9, 0)
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        assert_eq!(
            resolve_tangent_handle_hit(&points, &ray, Some(0), InterpolationMode::Hermite),
            Some(TangentHandle::Hermite)
        );
        let state = resolve_pointer_down(
            &points,
            InterpolationMode::Hermite,
            PickState::PointSelected { index: 0 },
            &ray,
        );
        assert_eq!(
            state,
            PickState::HandleGrabbed {
                index: 0,
                handle: GrabbedHandle::Axis(Axis::Y)
            }
        );
    }

    #[test]
    fn tangent_handle_wins_over_other_point() {
        let mut points = three_points();
        // Punkt 2 liegt genau auf der Hermite-Spitze von Punkt 1
        points[2].position = points[1].hermite_handle();
        let ray = ray_at(points[2].position);
        assert_eq!(resolve_point_hit(&points, &ray), Some(2));
        let state = resolve_pointer_down(
            &points,
            InterpolationMode::Hermite,
            PickState::PointSelected { index: 1 },
            &ray,
        );
        assert_eq!(
            state,
            PickState::HandleGrabbed {
                index: 1,
                handle: GrabbedHandle::Tangent(TangentHandle::Hermite)
            }
        );
    }

    #[test]
    fn pointer_down_on_empty_space_deselects() {
        let points = three_points();
        let state = resolve_pointer_down(
            &points,
            InterpolationMode::Line,
            PickState::PointSelected { index: 2 },
            &ray_at(Vec3::new(10.0, 10.0, 0.0)),
        );
        assert_eq!(state, PickState::Idle);
    }

    #[test]
    fn pointer_down_selects_other_point() {
        let points = three_points();
        let state = resolve_pointer_down(
            &points,
            InterpolationMode::Hermite,
            PickState::PointSelected { index: 0 },
            &ray_at(Vec3::new(2.0, 0.0, 0.0)),
        );
        assert_eq!(state, PickState::PointSelected { index: 2 });
    }

    #[test]
    fn released_keeps_point_selected() {
        let grabbed = PickState::HandleGrabbed {
            index: 1,
            handle: GrabbedHandle::Tangent(TangentHandle::Hermite),
        };
        assert_eq!(grabbed.released(), PickState::PointSelected { index: 1 });
        assert_eq!(PickState::Idle.released(), PickState::Idle);
    }

    #[test]
    fn drag_plane_for_x_and_y_is_z_plane() {
        let point = ControlPoint::new(Vec3::new(1.0, 2.0, 3.0));
        let ray = Ray::new(Vec3::new(5.0, 6.0, 13.0), Vec3::NEG_Z);
        for axis in [Axis::X, Axis::Y] {
            let hit = drag_plane_intersection(&point, &ray, axis).unwrap();
            assert_relative_eq!(hit.z, 3.0);
            assert_relative_eq!(hit.x, 5.0);
            assert_relative_eq!(hit.y, 6.0);
        }
    }

    #[test]
    fn drag_plane_for_z_is_y_plane() {
        let point = ControlPoint::new(Vec3::new(1.0, 2.0, 3.0));
        let ray = Ray::new(Vec3::new(0.0, 12.0, 4.0), Vec3::NEG_Y);
        let hit = drag_plane_intersection(&point, &ray, Axis::Z).unwrap();
        assert_relative_eq!(hit.y, 2.0);
        assert_relative_eq!(hit.z, 4.0);
        // Z-Plane ist parallel zu diesem Strahl
        assert!(drag_plane_intersection(&point, &ray, Axis::X).is_none());
    }
}
