use crate::core::ArcLengthWalker;
use glam::Vec3;

/// Abspielbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    /// Walker über die beim Start abgetastete Polyline
    pub walker: ArcLengthWalker,
    /// Aktuelle Marker-Position (None = kein Lauf aktiv)
    pub marker: Option<Vec3>,
}

impl PlaybackState {
    /// Erstellt einen inaktiven Abspiel-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob gerade abgespielt wird.
    pub fn is_running(&self) -> bool {
        self.walker.is_active()
    }
}
