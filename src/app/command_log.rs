//! Verlauf der vom Controller ausgeführten Planer-Commands.
//!
//! Tests prüfen darüber, welche Commands ein Intent ausgelöst hat.

use super::AppCommand;

/// Commands in Ausführungsreihenfolge, ältester zuerst.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Leerer Verlauf.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Protokolliert einen Command vor seiner Ausführung durch den Controller.
    /// Ab 1000 Einträgen fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Anzahl protokollierter Commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` solange der Controller noch nichts ausgeführt hat
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Protokollierte Commands, z.B. für Assertions in Flow-Tests
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
