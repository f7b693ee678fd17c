//! The prompt improvement endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::{ARCHIVE_LEN, NEXT_PROMPT};
use crate::error::AppError;
use crate::improve::improve;
use crate::memory::Exchange;
use crate::state::AppState;

/// Request payload for POST /dave.
#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DaveResponse {
    #[serde(rename = "✅ Done")]
    pub done: String,
    #[serde(rename = "⏳ Next")]
    pub next: String,
    /// The user/assistant pair this request appended
    #[serde(rename = "🌌 Archive")]
    pub archive: [Exchange; ARCHIVE_LEN],
}

/// POST /dave handler.
///
/// Rejected bodies never reach the memory log.
#[instrument(name = "dave::improve", skip_all)]
pub async fn dave(
    State(state): State<AppState>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<DaveResponse>, AppError> {
    let Json(input) = payload?;
    tracing::debug!(text_len = input.text.len(), "Improving text");

    let reply = improve(&input.text);
    let archive = state.memory.record_turn(input.text, reply.clone());

    Ok(Json(DaveResponse {
        done: reply,
        next: NEXT_PROMPT.to_string(),
        archive,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ARCHIVE_KEY, DONE_KEY, NEXT_KEY};

    #[test]
    fn test_response_keys_match_constants() {
        let response = DaveResponse {
            done: "reply".to_string(),
            next: NEXT_PROMPT.to_string(),
            archive: [Exchange::user("q"), Exchange::assistant("reply")],
        };
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        let mut expected = vec![DONE_KEY, NEXT_KEY, ARCHIVE_KEY];
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);

        assert_eq!(object[DONE_KEY], "reply");
        assert_eq!(object[NEXT_KEY], NEXT_PROMPT);
        assert_eq!(object[ARCHIVE_KEY].as_array().map(Vec::len), Some(ARCHIVE_LEN));
    }
}
