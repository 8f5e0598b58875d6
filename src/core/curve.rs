//! Kurvenmodell: geordnete Kontrollpunkte, aktiver Modus und Selektion.

use super::pick::{self, Axis, GrabbedHandle, PickState, TangentHandle};
use super::{ControlPoint, InterpolationMode, Ray};
use crate::shared::options::{AXIS_HANDLE_OFFSET, INSERT_OFFSET};
use crate::shared::spline_geometry::{
    cubic_bezier, hermite_point, line_point, parabola_point, sample_segment,
    samples_per_segment,
};
use glam::Vec3;

/// Obergrenze der Vorab-Reservierung in `evaluate`; sehr kleine Schritte
/// wachsen darüber hinaus normal weiter.
const MAX_RESERVED_SAMPLES: usize = 1 << 16;

/// Geordnete Kontrollpunkte mit Interpolationsmodus und Pick-Zustand.
///
/// Einfüge-Reihenfolge ist Kurven-Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct CurveModel {
    points: Vec<ControlPoint>,
    mode: InterpolationMode,
    pick: PickState,
}

impl CurveModel {
    /// Erstellt ein leeres Modell im Linien-Modus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein leeres Modell mit vorgegebenem Modus.
    pub fn with_mode(mode: InterpolationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Read-only Sicht auf alle Kontrollpunkte.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Einzelner Kontrollpunkt.
    pub fn point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Aktiver Interpolationsmodus.
    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }

    /// Aktueller Pick-Zustand.
    pub fn pick_state(&self) -> PickState {
        self.pick
    }

    /// Index des aktiven Punkts.
    pub fn active_index(&self) -> Option<usize> {
        self.pick.active_index()
    }

    /// Aktiver Punkt.
    pub fn active_point(&self) -> Option<&ControlPoint> {
        self.points.get(self.active_index()?)
    }

    /// Ob `index` weder erster noch letzter Punkt ist.
    pub fn is_interior(&self, index: usize) -> bool {
        index > 0 && index + 1 < self.points.len()
    }

    // ── Mutation ────────────────────────────────────────────────────

    /// Hängt einen neuen Kontrollpunkt an und gibt seinen Index zurück.
    ///
    /// Der Punkt liegt um `INSERT_OFFSET` neben seinem Vorgänger. Wird der
    /// Vorgänger dadurch zum inneren Punkt, wird sein Rückwärts-Handle auf
    /// das negierte Vorwärts-Handle gesetzt.
    pub fn insert_point(&mut self) -> usize {
        let position = self
            .points
            .last()
            .map_or(Vec3::ZERO, |prev| prev.position + INSERT_OFFSET);
        self.push_point(position)
    }

    /// Hängt einen Kontrollpunkt an einer festen Position an.
    ///
    /// Es gelten dieselben Handle-Regeln wie bei `insert_point`.
    pub fn insert_point_at(&mut self, position: Vec3) -> usize {
        self.push_point(position)
    }

    fn push_point(&mut self, position: Vec3) -> usize {
        self.points.push(ControlPoint::new(position));
        let last = self.points.len() - 1;
        if last >= 2 {
            let prev = &mut self.points[last - 1];
            prev.bezier_backward = -prev.bezier_forward;
        }
        log::info!("Kontrollpunkt {} eingefügt bei {}", last, position);
        last
    }

    /// Wechselt den Interpolationsmodus. Es wird nichts neu abgetastet.
    pub fn set_mode(&mut self, mode: InterpolationMode) {
        if self.mode != mode {
            log::info!("Interpolationsmodus: {} → {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
    }

    /// Setzt eine Koordinate des aktiven Punkts aus einem Drag-Weltwert.
    ///
    /// Das Handle sitzt um `AXIS_HANDLE_OFFSET` versetzt auf seiner Achse;
    /// dieser Versatz wird vor dem Zurückschreiben abgezogen.
    pub fn move_active_point(&mut self, axis: Axis, world_value: f32) {
        let Some(index) = self.active_index() else {
            return;
        };
        let Some(point) = self.points.get_mut(index) else {
            return;
        };
        point.position[axis.index()] = world_value - AXIS_HANDLE_OFFSET;
    }

    /// Aktualisiert das gegriffene Tangenten-Handle aus einem Strahl.
    ///
    /// Geschnitten wird mit der Ebene durch die aktuelle Handle-Spitze mit
    /// Normale `-view_direction`. Bei inneren Punkten im Bézier-Modus wird das
    /// Gegen-Handle kolinear und entgegengesetzt nachgeführt (Länge bleibt).
    pub fn update_active_tangent(&mut self, ray: &Ray, view_direction: Vec3) {
        let PickState::HandleGrabbed {
            index,
            handle: GrabbedHandle::Tangent(handle),
        } = self.pick
        else {
            return;
        };
        let interior = self.is_interior(index);
        let mode = self.mode;
        let Some(point) = self.points.get_mut(index) else {
            return;
        };

        match (mode, handle) {
            (InterpolationMode::Hermite, TangentHandle::Hermite) => {
                if let Some(hit) = ray.plane_intersection(point.hermite_handle(), -view_direction) {
                    point.hermite_tangent = hit - point.position;
                }
            }
            (InterpolationMode::Bezier, TangentHandle::BezierForward)
            | (InterpolationMode::Bezier, TangentHandle::BezierBackward) => {
                let position = point.position;
                let (edited, opposite) = if handle == TangentHandle::BezierForward {
                    (&mut point.bezier_forward, &mut point.bezier_backward)
                } else {
                    (&mut point.bezier_backward, &mut point.bezier_forward)
                };
                let Some(hit) = ray.plane_intersection(position + *edited, -view_direction)
                else {
                    return;
                };
                *edited = hit - position;
                if interior {
                    if let Some(dir) = edited.try_normalize() {
                        *opposite = -dir * opposite.length();
                    }
                }
            }
            _ => {
                log::debug!(
                    "Tangenten-Handle {:?} passt nicht zum Modus {}",
                    handle,
                    mode.name()
                );
            }
        }
    }

    // ── Pointer-Interaktion ─────────────────────────────────────────

    /// Pointer-Down: Handles des aktiven Punkts vor beliebigen Punkten.
    pub fn pointer_down(&mut self, ray: &Ray) -> PickState {
        let new_state = pick::resolve_pointer_down(&self.points, self.mode, self.pick, ray);
        if new_state != self.pick {
            log::debug!("Pick-Zustand: {:?} → {:?}", self.pick, new_state);
        }
        self.pick = new_state;
        new_state
    }

    /// Pointer-Drag: bewegt das gegriffene Handle.
    pub fn pointer_drag(&mut self, ray: &Ray, view_direction: Vec3) {
        match self.pick.grabbed_handle() {
            Some(GrabbedHandle::Axis(axis)) => {
                let Some(point) = self.active_point() else {
                    return;
                };
                if let Some(hit) = pick::drag_plane_intersection(point, ray, axis) {
                    self.move_active_point(axis, hit[axis.index()]);
                }
            }
            Some(GrabbedHandle::Tangent(_)) => self.update_active_tangent(ray, view_direction),
            None => {}
        }
    }

    /// Pointer-Up: löst ein gegriffenes Handle, der Punkt bleibt aktiv.
    pub fn pointer_up(&mut self) {
        self.pick = self.pick.released();
    }

    /// Hebt jede Selektion auf.
    pub fn clear_selection(&mut self) {
        self.pick = PickState::Idle;
    }

    /// Setzt den aktiven Punkt direkt (z.B. aus einer Liste im UI).
    pub fn select_point(&mut self, index: usize) {
        if index < self.points.len() {
            self.pick = PickState::PointSelected { index };
        }
    }

    // ── Auswertung ──────────────────────────────────────────────────

    /// Tastet die Kurve im aktiven Modus ab.
    pub fn evaluate_active(&self, step: f32) -> Vec<Vec3> {
        self.evaluate(self.mode, step)
    }

    /// Tastet die Kurve im Modus `mode` mit Schritt `step` pro Segment ab.
    ///
    /// Liefert eine leere Liste bei weniger als 2 Punkten oder ungültigem
    /// Schritt. Gemeinsame Segment-Endpunkte erscheinen doppelt.
    pub fn evaluate(&self, mode: InterpolationMode, step: f32) -> Vec<Vec3> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        if !step.is_finite() || step <= 0.0 {
            log::warn!("Ungültiger Abtastschritt {}, keine Samples", step);
            return Vec::new();
        }
        let step = step.min(1.0);

        let capacity = (n - 1)
            .saturating_mul(samples_per_segment(step))
            .min(MAX_RESERVED_SAMPLES);
        let mut out = Vec::with_capacity(capacity);
        for i in 0..n - 1 {
            let a = &self.points[i];
            let b = &self.points[i + 1];
            match mode {
                InterpolationMode::Line => {
                    sample_segment(
                        |u| line_point(a.position, b.position, u),
                        b.position,
                        step,
                        &mut out,
                    );
                }
                InterpolationMode::Hermite => {
                    sample_segment(
                        |u| {
                            hermite_point(
                                a.position,
                                b.position,
                                a.hermite_tangent,
                                b.hermite_tangent,
                                u,
                            )
                        },
                        b.position,
                        step,
                        &mut out,
                    );
                }
                InterpolationMode::Parabola => {
                    // Virtuelle Nachbarn an den Enden: nächster echter Punkt
                    let p0 = if i == 0 {
                        a.position
                    } else {
                        self.points[i - 1].position
                    };
                    let p3 = if i + 2 < n {
                        self.points[i + 2].position
                    } else {
                        b.position
                    };
                    sample_segment(
                        |u| parabola_point(p0, a.position, b.position, p3, u),
                        b.position,
                        step,
                        &mut out,
                    );
                }
                InterpolationMode::Bezier => {
                    let p1 = a.bezier_forward_handle();
                    let p2 = b.bezier_backward_handle();
                    sample_segment(
                        |u| cubic_bezier(a.position, p1, p2, b.position, u),
                        b.position,
                        step,
                        &mut out,
                    );
                }
            }
        }
        out
    }
}
