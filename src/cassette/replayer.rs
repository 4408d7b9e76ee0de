//! Replays recorded interactions from a cassette.

use std::collections::HashMap;
use std::path::Path;

use super::format::{Cassette, Interaction};
use crate::error::TicketError;

/// Serves interactions from a loaded cassette, in order, per method.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<String, Vec<Interaction>>,
    cursors: HashMap<String, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<String, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues.entry(interaction.method.clone()).or_default().push(interaction.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Read and parse a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(Self::new(&cassette))
    }

    /// Return the next interaction recorded for `method`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::Cassette`] when the cassette holds no (more)
    /// interactions for `method`.
    pub fn next_interaction(&mut self, method: &str) -> Result<&Interaction, TicketError> {
        let Some(queue) = self.queues.get(method) else {
            let mut available: Vec<&str> = self.queues.keys().map(String::as_str).collect();
            available.sort_unstable();
            return Err(TicketError::Cassette {
                message: format!(
                    "no interactions recorded for method {method:?}; available: [{}]",
                    available.join(", ")
                ),
            });
        };

        let cursor = self.cursors.entry(method.to_string()).or_default();
        let Some(interaction) = queue.get(*cursor) else {
            return Err(TicketError::Cassette {
                message: format!(
                    "all {} interactions for method {method:?} have been consumed",
                    queue.len()
                ),
            });
        };
        *cursor += 1;
        Ok(interaction)
    }
}
