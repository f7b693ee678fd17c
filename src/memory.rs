//! In-memory exchange log shared by all requests.
//!
//! The log only ever grows: every call to [`MemoryLog::record_turn`] appends a
//! user record followed by the matching assistant record, so its length is
//! always even. It lives as long as the `AppState` that owns it and is never
//! persisted.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::ARCHIVE_LEN;

/// Author of an exchange record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One logged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub role: Role,
    pub text: String,
}

impl Exchange {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Append-only, process-lifetime log of exchanges, cloneable across handlers.
#[derive(Clone, Default)]
pub struct MemoryLog {
    entries: Arc<RwLock<Vec<Exchange>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user record and its assistant reply, returning the pair.
    ///
    /// Both records are pushed under one write lock so the pair is always
    /// contiguous, even when requests run concurrently.
    pub fn record_turn(
        &self,
        user_text: impl Into<String>,
        reply: impl Into<String>,
    ) -> [Exchange; ARCHIVE_LEN] {
        let turn = [Exchange::user(user_text), Exchange::assistant(reply)];
        let mut entries = self.entries.write();
        entries.extend(turn.iter().cloned());
        tracing::debug!(log_len = entries.len(), "Recorded exchange");
        turn
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of every entry, oldest first.
    pub fn snapshot(&self) -> Vec<Exchange> {
        self.entries.read().clone()
    }

    /// The last `n` entries, oldest first (fewer if the log is shorter).
    pub fn tail(&self, n: usize) -> Vec<Exchange> {
        let entries = self.entries.read();
        let start = entries.len().saturating_sub(n);
        entries[start..].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = MemoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.tail(2).is_empty());
    }

    #[test]
    fn test_record_turn_appends_user_then_assistant() {
        let log = MemoryLog::new();
        let turn = log.record_turn("hi", "hello back");

        assert_eq!(turn[0], Exchange::user("hi"));
        assert_eq!(turn[1], Exchange::assistant("hello back"));
        assert_eq!(log.snapshot(), turn.to_vec());
    }

    #[test]
    fn test_length_stays_even() {
        let log = MemoryLog::new();
        for i in 0..5 {
            log.record_turn(format!("q{i}"), format!("a{i}"));
            assert_eq!(log.len() % 2, 0);
        }
        assert_eq!(log.len(), 10);
    }

    #[test]
    fn test_tail_returns_latest_pair() {
        let log = MemoryLog::new();
        log.record_turn("first", "one");
        let latest = log.record_turn("second", "two");
        assert_eq!(log.tail(2), latest.to_vec());
        assert_eq!(log.tail(100).len(), 4);
    }

    #[test]
    fn test_clones_share_entries() {
        let log = MemoryLog::new();
        let other = log.clone();
        other.record_turn("shared", "yes");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_concurrent_turns_stay_paired() {
        let log = MemoryLog::new();
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let log = log.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        log.record_turn(format!("{t}-{i}"), format!("reply {t}-{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let entries = log.snapshot();
        assert_eq!(entries.len(), 8 * 50 * 2);
        for pair in entries.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
            assert_eq!(pair[1].text, format!("reply {}", pair[0].text));
        }
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let json = serde_json::to_value(Exchange::assistant("x")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "text": "x"}));
    }
}
