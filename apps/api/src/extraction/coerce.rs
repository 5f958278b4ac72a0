//! Response coercer — best-effort interpretation of the completion output as
//! JSON, with a lenient fallback to the raw string.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

/// Outcome of coercing the model's reply.
///
/// Serialized untagged: the caller sees either the parsed structure or the
/// original string, never a wrapper object. Keeping the two cases distinct in
/// code avoids duck-typing the response internally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coerced {
    Parsed(Value),
    Raw(String),
}

/// Tries to parse the completion output as JSON. On failure, logs the
/// condition and returns the original string unchanged. Never errors.
///
/// A plain parse-or-passthrough: no trimming, no fence stripping. Output that
/// is anything other than valid JSON comes back verbatim as `Raw`.
pub fn coerce(content: String) -> Coerced {
    match serde_json::from_str::<Value>(&content) {
        Ok(value) => {
            info!("Parsed completion output as JSON");
            Coerced::Parsed(value)
        }
        Err(e) => {
            warn!("Completion output is not valid JSON ({e}); returning raw text");
            Coerced::Raw(content)
        }
    }
}
