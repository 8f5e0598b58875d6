//! Strahl und Treffer-Primitive (Kugel, achsenparallele Box, Ebene).

use glam::Vec3;

/// Strahl im Koordinatenraum der Kontrollpunkte.
///
/// Wird extern aus Bildschirm-Koordinaten und Kamera erzeugt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen neuen Strahl. Die Richtung muss nicht normiert sein.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Punkt auf dem Strahl beim Parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Prüft, ob der Strahl eine Kugel trifft (nur Treffer mit `t >= 0`).
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let a = self.direction.length_squared();
        if a <= f32::EPSILON {
            return false;
        }
        let diff = self.origin - center;
        let b = diff.dot(self.direction);
        let c = diff.length_squared() - radius * radius;
        let disc = b * b - a * c;
        if disc < 0.0 {
            return false;
        }
        // Größere Wurzel hinter dem Ursprung → Kugel liegt komplett hinter dem Strahl
        let t_far = (-b + disc.sqrt()) / a;
        t_far >= 0.0
    }

    /// Slab-Test gegen eine achsenparallele Box (nur Treffer mit `t >= 0`).
    pub fn intersects_aabb(&self, min: Vec3, max: Vec3) -> bool {
        if self.direction.length_squared() <= f32::EPSILON {
            return false;
        }
        let mut t_min = 0.0f32;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let o = self.origin[axis];
            let d = self.direction[axis];
            if d.abs() <= f32::EPSILON {
                if o < min[axis] || o > max[axis] {
                    return false;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (min[axis] - o) * inv;
            let mut t1 = (max[axis] - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }
        true
    }

    /// Schnittpunkt mit der Ebene durch `plane_point` mit Normale `plane_normal`.
    ///
    /// Gibt `None`, wenn der Strahl parallel zur Ebene verläuft.
    pub fn plane_intersection(&self, plane_point: Vec3, plane_normal: Vec3) -> Option<Vec3> {
        let denom = plane_normal.dot(self.direction);
        if denom.abs() <= f32::EPSILON {
            return None;
        }
        let t = plane_normal.dot(plane_point - self.origin) / denom;
        Some(self.at(t))
    }
}
