//! Strict decoding of free-text model replies into typed payloads.

use serde::de::DeserializeOwned;

use crate::llm_client::extract_json_span;

const DETAILS_MAX_CHARS: usize = 150;

/// Outcome of decoding a model reply.
#[derive(Debug, PartialEq)]
pub enum Decoded<T> {
    Parsed(T),
    /// The reply held no JSON span at all.
    NoPayload,
    /// A JSON-looking span was present but did not match the schema.
    Malformed { raw: String },
}

pub fn decode_payload<T: DeserializeOwned>(reply: &str) -> Decoded<T> {
    let Some(span) = extract_json_span(reply) else {
        return Decoded::NoPayload;
    };
    match serde_json::from_str::<T>(span) {
        Ok(value) => Decoded::Parsed(value),
        Err(e) => {
            tracing::debug!("payload did not match schema: {e}");
            Decoded::Malformed {
                raw: reply.to_string(),
            }
        }
    }
}

/// The leading part of a raw reply, for error messages shown to the user.
pub fn details_snippet(raw: &str) -> String {
    raw.chars().take(DETAILS_MAX_CHARS).collect()
}
