//! Replaying adapters that serve recorded interactions.

pub mod entropy;
pub mod filesystem;

pub use entropy::ReplayingEntropy;
pub use filesystem::ReplayingFileSystem;

use serde::de::DeserializeOwned;

use crate::cassette::CassetteError;

/// Reads a recorded `{"ok": value}` / `{"err": message}` output.
///
/// The outer `Err` means the recording itself is malformed; the inner one is
/// the failure that was recorded.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: &serde_json::Value,
    port: &str,
    method: &str,
) -> Result<Result<T, String>, CassetteError> {
    let malformed = |message: String| CassetteError::Malformed {
        port: port.to_string(),
        method: method.to_string(),
        message,
    };

    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Ok(Err(msg));
    }
    let value = output.get("ok").ok_or_else(|| malformed("expected an `ok` or `err` key".into()))?;
    serde_json::from_value(value.clone())
        .map(Ok)
        .map_err(|e| malformed(format!("failed to deserialize: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_ok_value() {
        let out: Result<Vec<u8>, String> =
            replay_result(&json!({"ok": [1, 2]}), "entropy", "fill").unwrap();
        assert_eq!(out, Ok(vec![1, 2]));
    }

    #[test]
    fn reads_recorded_error() {
        let out: Result<Vec<u8>, String> =
            replay_result(&json!({"err": "gone"}), "entropy", "fill").unwrap();
        assert_eq!(out, Err("gone".to_string()));
    }

    #[test]
    fn rejects_unknown_shape() {
        let err = replay_result::<Vec<u8>>(&json!([1, 2]), "entropy", "fill").unwrap_err();
        assert!(matches!(err, CassetteError::Malformed { .. }));
    }
}
