//! Kontrollpunkt mit Position und modusabhängigen Tangenten-Daten.

use crate::shared::options::{
    DEFAULT_BEZIER_BACKWARD, DEFAULT_BEZIER_FORWARD, DEFAULT_HERMITE_TANGENT,
};
use glam::Vec3;

/// Einzelner Kontrollpunkt der Kurve.
///
/// Alle Tangenten sind relativ zur Position gespeichert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in Welt-Koordinaten
    pub position: Vec3,
    /// Hermite-Tangente (nur im Hermite-Modus verwendet)
    pub hermite_tangent: Vec3,
    /// Bézier-Handle in Kurvenrichtung
    pub bezier_forward: Vec3,
    /// Bézier-Handle gegen die Kurvenrichtung
    pub bezier_backward: Vec3,
}

impl ControlPoint {
    /// Erstellt einen Punkt an `position` mit Standard-Tangenten.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            hermite_tangent: DEFAULT_HERMITE_TANGENT,
            bezier_forward: DEFAULT_BEZIER_FORWARD,
            bezier_backward: DEFAULT_BEZIER_BACKWARD,
        }
    }

    /// Absolute Position der Hermite-Tangentenspitze.
    pub fn hermite_handle(&self) -> Vec3 {
        self.position + self.hermite_tangent
    }

    /// Absolute Position des Vorwärts-Handles.
    pub fn bezier_forward_handle(&self) -> Vec3 {
        self.position + self.bezier_forward
    }

    /// Absolute Position des Rückwärts-Handles.
    pub fn bezier_backward_handle(&self) -> Vec3 {
        self.position + self.bezier_backward
    }
}

impl Default for ControlPoint {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
