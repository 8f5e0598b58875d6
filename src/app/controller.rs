//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Kurven-Operationen auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::InsertPoint => handlers::editing::insert_point(state),
            AppCommand::SetMode { mode } => handlers::editing::set_mode(state, mode),

            // === Selektion & Drag ===
            AppCommand::PickAt { ray } => handlers::selection::pick_at(state, &ray),
            AppCommand::DragActiveHandle {
                ray,
                view_direction,
            } => handlers::selection::drag_active_handle(state, &ray, view_direction),
            AppCommand::ReleaseHandle => handlers::selection::release_handle(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Abspielen ===
            AppCommand::StartTraversal { now } => handlers::playback::start(state, now),
            AppCommand::StopTraversal => handlers::playback::stop(state),
            AppCommand::AdvanceTraversal { now } => handlers::playback::advance(state, now),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
