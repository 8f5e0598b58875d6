use crate::app::CommandLog;
use crate::core::CurveModel;
use crate::shared::SplineOptions;

use super::PlaybackState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kurvenmodell inkl. Selektion (exklusiv vom Update-Loop mutiert)
    pub curve: CurveModel,
    /// Abspiel-Zustand (Walker + Marker)
    pub playback: PlaybackState,
    /// Laufzeit-Optionen (Schrittweiten, Geschwindigkeit)
    pub options: SplineOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SplineOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: SplineOptions) -> Self {
        let options = options.sanitized();
        Self {
            curve: CurveModel::with_mode(options.initial_mode),
            playback: PlaybackState::new(),
            options,
            command_log: CommandLog::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
