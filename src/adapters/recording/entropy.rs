//! Recording adapter for the `EntropySource` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::session::ENTROPY_PORT;
use crate::error::RandomSourceError;
use crate::ports::EntropySource;

/// Records the bytes an inner source supplies, or the failure it reports.
pub struct RecordingEntropy {
    inner: Box<dyn EntropySource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEntropy {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn EntropySource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct FillInput {
    len: usize,
}

impl EntropySource for RecordingEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomSourceError> {
        let result = self.inner.fill(buf);
        // Store the bare source message so replay rebuilds an equal error.
        let recorded = result.as_ref().map(|_| buf.to_vec()).map_err(RandomSourceError::message);
        let input = FillInput { len: buf.len() };
        record_result(&self.recorder, ENTROPY_PORT, "fill", &input, &recorded);
        result
    }
}
