//! Zentrale Konfiguration für den Spline-Kern.
//!
//! `SplineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte beschreiben die feste Handle-Geometrie.

use crate::core::InterpolationMode;
use glam::Vec3;
use serde::{Deserialize, Serialize};

// ── Picking ─────────────────────────────────────────────────────────

/// Radius der Bounding-Sphere um jeden Kontrollpunkt.
pub const POINT_PICK_RADIUS: f32 = 0.1;
/// Abstand der Achsen-Handles vom Punkt-Ursprung entlang ihrer Achse.
pub const AXIS_HANDLE_OFFSET: f32 = 0.9;
/// Radius der Bounding-Sphere um jedes Achsen-Handle.
pub const AXIS_HANDLE_PICK_RADIUS: f32 = 0.20;
/// Halbe Kantenlänge der Box um ein Tangenten-Handle.
pub const TANGENT_HANDLE_HALF_EXTENT: f32 = 0.1;

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Standard-Hermite-Tangente (relativ zum Punkt).
pub const DEFAULT_HERMITE_TANGENT: Vec3 = Vec3::new(0.0, 1.5, 0.0);
/// Standard-Bézier-Handle vorwärts (relativ zum Punkt).
pub const DEFAULT_BEZIER_FORWARD: Vec3 = Vec3::new(0.0, 1.0, 1.0);
/// Standard-Bézier-Handle rückwärts (relativ zum Punkt).
pub const DEFAULT_BEZIER_BACKWARD: Vec3 = Vec3::new(0.0, -1.0, -1.0);
/// Versatz eines neu eingefügten Punkts gegenüber seinem Vorgänger.
pub const INSERT_OFFSET: Vec3 = Vec3::new(1.0, 0.0, 0.0);

// ── Sampling / Abspielen ────────────────────────────────────────────

/// Standard-Abtastschritt pro Segment für die Darstellung.
pub const SAMPLE_STEP: f32 = 0.1;
/// Standard-Abtastschritt pro Segment für das Abspielen.
pub const TRAVERSAL_SAMPLE_STEP: f32 = 0.1;
/// Standard-Geschwindigkeit beim Abspielen (Welteinheiten pro Sekunde).
pub const TRAVERSAL_VELOCITY: f32 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `spline_interp.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineOptions {
    /// Abtastschritt pro Segment für die dargestellte Polyline, in (0, 1]
    pub sample_step: f32,
    /// Abtastschritt pro Segment für die abgespielte Polyline, in (0, 1]
    pub traversal_sample_step: f32,
    /// Geschwindigkeit beim Abspielen (Welteinheiten pro Sekunde)
    pub traversal_velocity: f32,
    /// Interpolationsmodus beim Start
    pub initial_mode: InterpolationMode,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            sample_step: SAMPLE_STEP,
            traversal_sample_step: TRAVERSAL_SAMPLE_STEP,
            traversal_velocity: TRAVERSAL_VELOCITY,
            initial_mode: InterpolationMode::Line,
        }
    }
}

impl SplineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt sie oder ist sie fehlerhaft,
    /// werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<SplineOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_interp"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_interp.toml")
    }

    /// Klemmt Schrittweiten in (0, 1] und erzwingt eine endliche Geschwindigkeit.
    pub fn sanitized(mut self) -> Self {
        self.sample_step = sanitize_step(self.sample_step, SAMPLE_STEP);
        self.traversal_sample_step =
            sanitize_step(self.traversal_sample_step, TRAVERSAL_SAMPLE_STEP);
        if !self.traversal_velocity.is_finite() {
            self.traversal_velocity = TRAVERSAL_VELOCITY;
        }
        self
    }
}

fn sanitize_step(step: f32, fallback: f32) -> f32 {
    if step.is_finite() && step > 0.0 {
        step.min(1.0)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: SplineOptions = toml::from_str("traversal_velocity = 2.5").unwrap();
        assert_eq!(opts.traversal_velocity, 2.5);
        assert_eq!(opts.sample_step, SAMPLE_STEP);
        assert_eq!(opts.initial_mode, InterpolationMode::Line);
    }

    #[test]
    fn mode_is_read_by_name() {
        let opts: SplineOptions = toml::from_str("initial_mode = \"bezier\"").unwrap();
        assert_eq!(opts.initial_mode, InterpolationMode::Bezier);
    }

    #[test]
    fn sanitized_clamps_invalid_steps() {
        let opts = SplineOptions {
            sample_step: 0.0,
            traversal_sample_step: 4.0,
            traversal_velocity: f32::NAN,
            ..SplineOptions::default()
        }
        .sanitized();
        assert_eq!(opts.sample_step, SAMPLE_STEP);
        assert_eq!(opts.traversal_sample_step, 1.0);
        assert_eq!(opts.traversal_velocity, TRAVERSAL_VELOCITY);
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let opts = SplineOptions {
            sample_step: 0.25,
            initial_mode: InterpolationMode::Hermite,
            ..SplineOptions::default()
        };
        let text = toml::to_string_pretty(&opts).unwrap();
        let back: SplineOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("spline_interp_gibt_es_nicht.toml");
        let opts = SplineOptions::load_from_file(&path);
        assert_eq!(opts, SplineOptions::default());
    }
}
