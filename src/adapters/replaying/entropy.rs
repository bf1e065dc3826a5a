//! Replaying adapter for the `EntropySource` port.

use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::ENTROPY_PORT;
use crate::error::RandomSourceError;
use crate::ports::EntropySource;

/// Serves recorded random bytes from a cassette.
///
/// Anything that prevents a faithful replay (exhausted cassette, malformed
/// entry, length mismatch) surfaces as a [`RandomSourceError`], the same
/// way a failing OS source would.
pub struct ReplayingEntropy {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEntropy {
    /// Creates a new replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl EntropySource for ReplayingEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomSourceError> {
        let output = {
            let mut replayer = self
                .replayer
                .lock()
                .map_err(|_| RandomSourceError::new("replayer lock poisoned"))?;
            replayer
                .next_interaction(ENTROPY_PORT, "fill")
                .map_err(|e| RandomSourceError::new(e.to_string()))?
                .output
        };

        let bytes: Vec<u8> = replay_result(&output, ENTROPY_PORT, "fill")
            .map_err(|e| RandomSourceError::new(e.to_string()))?
            .map_err(RandomSourceError::new)?;

        if bytes.len() != buf.len() {
            return Err(RandomSourceError::new(format!(
                "recorded {} bytes but {} were requested",
                bytes.len(),
                buf.len()
            )));
        }
        buf.copy_from_slice(&bytes);
        tracing::trace!(len = buf.len(), "replayed entropy");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_source(outputs: Vec<serde_json::Value>) -> ReplayingEntropy {
        let interactions = outputs
            .into_iter()
            .enumerate()
            .map(|(seq, output)| Interaction {
                seq: seq as u64,
                port: "entropy".into(),
                method: "fill".into(),
                input: json!({"len": 4}),
                output,
            })
            .collect();
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: "0.1.0".into(),
            interactions,
        };
        ReplayingEntropy::new(CassetteReplayer::new(&cassette))
    }

    #[test]
    fn replays_bytes_in_order() {
        let source = make_source(vec![json!({"ok": [1, 2, 3, 4]}), json!({"ok": [5, 6, 7, 8]})]);
        let mut buf = [0u8; 4];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [5, 6, 7, 8]);
    }

    #[test]
    fn replays_recorded_failure() {
        let source = make_source(vec![json!({"err": "no device"})]);
        let err = source.fill(&mut [0u8; 4]).unwrap_err();
        assert_eq!(err, RandomSourceError::new("no device"));
    }

    #[test]
    fn length_mismatch_is_a_random_source_error() {
        let source = make_source(vec![json!({"ok": [1, 2]})]);
        let err = source.fill(&mut [0u8; 4]).unwrap_err();
        assert!(err.message().contains("recorded 2 bytes"));
    }

    #[test]
    fn exhausted_cassette_is_a_random_source_error() {
        let source = make_source(vec![]);
        let err = source.fill(&mut [0u8; 4]).unwrap_err();
        assert!(err.message().contains("cassette exhausted"));
    }
}
