//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::SplineOptions;
use std::path::Path;

/// Übernimmt neue Optionen (bereinigt).
pub fn apply(state: &mut AppState, options: SplineOptions) {
    state.options = options.sanitized();
}

/// Speichert die aktuellen Optionen als TOML.
pub fn save(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)
}
