use crate::core::{InterpolationMode, Ray};
use crate::shared::SplineOptions;
use glam::Vec3;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kontrollpunkt anhängen
    InsertPoint,
    /// Interpolationsmodus setzen
    SetMode { mode: InterpolationMode },
    /// Pointer-Down nach Pick-Priorität auswerten
    PickAt { ray: Ray },
    /// Gegriffenes Handle ziehen
    DragActiveHandle { ray: Ray, view_direction: Vec3 },
    /// Gegriffenes Handle loslassen
    ReleaseHandle,
    /// Selektion aufheben
    ClearSelection,
    /// Kurve abtasten und Abspielen starten
    StartTraversal { now: f64 },
    /// Abspielen abbrechen
    StopTraversal,
    /// Abspiel-Marker weiterbewegen
    AdvanceTraversal { now: f64 },
    /// Neue Optionen übernehmen
    ApplyOptions { options: SplineOptions },
    /// Optionen als TOML speichern
    SaveOptions { path: PathBuf },
}
