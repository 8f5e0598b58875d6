//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::InterpolationMode;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddPointRequested => vec![AppCommand::InsertPoint],
        AppIntent::ModeSelected { index } => match InterpolationMode::from_index(index) {
            Some(mode) => vec![AppCommand::SetMode { mode }],
            None => {
                log::warn!("Unbekannter Modus-Index {}, ignoriert", index);
                vec![]
            }
        },
        AppIntent::PointerDown { ray } => vec![AppCommand::PickAt { ray }],
        AppIntent::PointerDrag {
            ray,
            view_direction,
        } => {
            // Ohne gegriffenes Handle hat ein Drag keine Wirkung
            if state.curve.pick_state().grabbed_handle().is_some() {
                vec![AppCommand::DragActiveHandle {
                    ray,
                    view_direction,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerUp => vec![AppCommand::ReleaseHandle],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::StartTraversalRequested { now } => vec![AppCommand::StartTraversal { now }],
        AppIntent::StopTraversalRequested => vec![AppCommand::StopTraversal],
        AppIntent::FrameTick { now } => {
            if state.playback.is_running() {
                vec![AppCommand::AdvanceTraversal { now }]
            } else {
                vec![]
            }
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested { path } => vec![AppCommand::SaveOptions { path }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ray;
    use glam::Vec3;

    #[test]
    fn invalid_mode_index_maps_to_nothing() {
        let state = AppState::new();
        assert!(map_intent_to_commands(&state, AppIntent::ModeSelected { index: 9 }).is_empty());
    }

    #[test]
    fn drag_without_grab_maps_to_nothing() {
        let state = AppState::new();
        let intent = AppIntent::PointerDrag {
            ray: Ray::new(Vec3::Z, Vec3::NEG_Z),
            view_direction: Vec3::NEG_Z,
        };
        assert!(map_intent_to_commands(&state, intent).is_empty());
    }

    #[test]
    fn frame_tick_only_while_playing() {
        let state = AppState::new();
        assert!(map_intent_to_commands(&state, AppIntent::FrameTick { now: 1.0 }).is_empty());
    }
}
