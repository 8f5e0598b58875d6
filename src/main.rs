//! Spline-Interp Demo.
//!
//! Headless-Durchlauf ohne Fenster: legt einige Kontrollpunkte an, tastet
//! alle Modi ab und spielt die Kurve mit simulierten 60 Hz ab.

use spline_interp::shared::spline_geometry::polyline_length;
use spline_interp::{AppController, AppIntent, AppState, InterpolationMode, SplineOptions};

/// Simulierte Frame-Dauer in Sekunden.
const FRAME_DT: f64 = 1.0 / 60.0;
/// Obergrenze simulierter Frames, falls die Geschwindigkeit 0 ist.
const MAX_FRAMES: usize = 60 * 120;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Spline-Interp v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = SplineOptions::load_from_file(&SplineOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    for _ in 0..4 {
        controller.handle_intent(&mut state, AppIntent::AddPointRequested)?;
    }

    for mode in InterpolationMode::ALL {
        let samples = state.curve.evaluate(mode, state.options.sample_step);
        log::info!(
            "{:>8}: {} Samples, Länge {:.3}",
            mode.name(),
            samples.len(),
            polyline_length(&samples)
        );
    }

    controller.handle_intent(
        &mut state,
        AppIntent::ModeSelected {
            index: InterpolationMode::Parabola.index(),
        },
    )?;
    controller.handle_intent(&mut state, AppIntent::StartTraversalRequested { now: 0.0 })?;

    let frames_per_log = (1.0 / FRAME_DT).round() as usize;
    for frame in 1..=MAX_FRAMES {
        if !state.playback.is_running() {
            break;
        }
        let now = frame as f64 * FRAME_DT;
        controller.handle_intent(&mut state, AppIntent::FrameTick { now })?;
        if frame % frames_per_log == 0 {
            if let Some(marker) = state.playback.marker {
                log::info!("t = {:5.2}s  Marker bei {}", now, marker);
            }
        }
    }

    log::info!(
        "{} Commands ausgeführt, {} Frame-Ticks",
        state.command_log.len(),
        state.command_log.frame_ticks()
    );
    Ok(())
}
