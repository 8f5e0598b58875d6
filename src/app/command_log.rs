//! Begrenzter Verlauf ausgeführter Commands.
//!
//! Frame-Ticks des Abspielens werden nur gezählt, damit ein 60-Hz-Lauf
//! den Verlauf nicht mit `AdvanceTraversal` flutet.

use super::AppCommand;
use std::collections::VecDeque;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    dropped: usize,
    frame_ticks: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    ///
    /// Läuft der Verlauf über, wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if let AppCommand::AdvanceTraversal { .. } = command {
            self.frame_ticks += 1;
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            let half = Self::MAX_ENTRIES / 2;
            self.entries.drain(..half);
            self.dropped += half;
            log::debug!("Command-Log übergelaufen, {} Einträge verworfen", half);
        }
        self.entries.push_back(command.clone());
    }

    /// Anzahl der gespeicherten Commands (ohne Frame-Ticks).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl wegen Überlauf verworfener Commands.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Anzahl gezählter Frame-Ticks des Abspielens.
    pub fn frame_ticks(&self) -> usize {
        self.frame_ticks
    }

    /// Zuletzt gespeicherter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Alle gespeicherten Commands, älteste zuerst.
    pub fn entries(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}
