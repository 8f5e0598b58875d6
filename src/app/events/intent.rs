use crate::core::Ray;
use crate::shared::SplineOptions;
use glam::Vec3;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// "Punkt hinzufügen" geklickt
    AddPointRequested,
    /// Modus im UI gewählt (0 = Line … 3 = Bezier)
    ModeSelected { index: usize },
    /// Linke Maustaste gedrückt; Strahl bereits aus der Kamera erzeugt
    PointerDown { ray: Ray },
    /// Maus mit gedrückter Taste bewegt
    PointerDrag { ray: Ray, view_direction: Vec3 },
    /// Linke Maustaste losgelassen
    PointerUp,
    /// Selektion aufheben (z.B. Escape)
    ClearSelectionRequested,
    /// "Abspielen starten" geklickt
    StartTraversalRequested { now: f64 },
    /// Abspielen abbrechen
    StopTraversalRequested,
    /// Einmal pro Frame vom Host
    FrameTick { now: f64 },
    /// Optionen im Dialog geändert
    OptionsChanged { options: SplineOptions },
    /// Optionen speichern
    SaveOptionsRequested { path: PathBuf },
}
