//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};
use super::CassetteError;

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Serves interactions from a loaded cassette, in recorded order, per
/// port/method pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, VecDeque<Interaction>>,
    consumed: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push_back(interaction.clone());
        }
        Self { queues, consumed: HashMap::new() }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns [`CassetteError::Exhausted`] if no (more) interactions were
    /// recorded for the pair.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<Interaction, CassetteError> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };
        let consumed = self.consumed.entry(key.clone()).or_insert(0);

        match self.queues.get_mut(&key).and_then(VecDeque::pop_front) {
            Some(interaction) => {
                *consumed += 1;
                Ok(interaction)
            }
            None => Err(CassetteError::Exhausted {
                port: key.port,
                method: key.method,
                consumed: *consumed,
            }),
        }
    }

    /// Interactions not yet served, across all ports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}
