//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Enthält nur reine Geometrie; der Kern braucht keinen Grafik-Kontext.

use crate::core::{Axis, InterpolationMode, TangentHandle};
use glam::Vec3;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Positionen aller Kontrollpunkte in Kurven-Reihenfolge
    pub control_points: Vec<Vec3>,
    /// Index des aktiven Punkts
    pub active_index: Option<usize>,
    /// Aktiver Interpolationsmodus
    pub mode: InterpolationMode,
    /// Abgetastete Kurve im aktiven Modus
    pub polyline: Vec<Vec3>,
    /// Achsen-Handles des aktiven Punkts (Weltposition je Achse)
    pub axis_handles: Vec<(Axis, Vec3)>,
    /// Sichtbare Tangenten-Handles des aktiven Punkts (Weltposition der Spitze)
    pub tangent_handles: Vec<(TangentHandle, Vec3)>,
    /// Marker des laufenden Abspielens
    pub playback_marker: Option<Vec3>,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet werden kann.
    pub fn has_curve(&self) -> bool {
        self.polyline.len() >= 2
    }
}
