//! Interpolationsmodus der Kurve.

use serde::{Deserialize, Serialize};

/// Welche Basis bei der Auswertung verwendet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Stückweise linear
    #[default]
    Line,
    /// Kubisch Hermite mit einer Tangente pro Punkt
    Hermite,
    /// Catmull-Rom-artige Parabel-Mischung über vier Punkte
    Parabola,
    /// Kubisch Bézier mit Vorwärts-/Rückwärts-Handle pro Punkt
    Bezier,
}

impl InterpolationMode {
    /// Alle Modi in Index-Reihenfolge.
    pub const ALL: [InterpolationMode; 4] = [
        InterpolationMode::Line,
        InterpolationMode::Hermite,
        InterpolationMode::Parabola,
        InterpolationMode::Bezier,
    ];

    /// Modus aus einem UI-Index (0 = Line … 3 = Bezier).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// UI-Index des Modus.
    pub fn index(self) -> usize {
        match self {
            InterpolationMode::Line => 0,
            InterpolationMode::Hermite => 1,
            InterpolationMode::Parabola => 2,
            InterpolationMode::Bezier => 3,
        }
    }

    /// Anzeigename.
    pub fn name(self) -> &'static str {
        match self {
            InterpolationMode::Line => "line",
            InterpolationMode::Hermite => "hermite",
            InterpolationMode::Parabola => "parabola",
            InterpolationMode::Bezier => "bezier",
        }
    }

    /// Ob der Modus editierbare Tangenten-Handles besitzt.
    pub fn has_tangent_handles(self) -> bool {
        matches!(self, InterpolationMode::Hermite | InterpolationMode::Bezier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for mode in InterpolationMode::ALL {
            assert_eq!(InterpolationMode::from_index(mode.index()), Some(mode));
        }
        assert_eq!(InterpolationMode::from_index(4), None);
    }

    #[test]
    fn only_hermite_and_bezier_have_handles() {
        assert!(!InterpolationMode::Line.has_tangent_handles());
        assert!(InterpolationMode::Hermite.has_tangent_handles());
        assert!(!InterpolationMode::Parabola.has_tangent_handles());
        assert!(InterpolationMode::Bezier.has_tangent_handles());
    }
}
