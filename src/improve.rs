//! The reply template applied to every request to `/dave`.

use crate::config::{REPLY_PREFIX, REPLY_SUFFIX};

/// Wrap the user's text in the fixed prefix and suffix, verbatim.
pub fn improve(text: &str) -> String {
    let mut reply = String::with_capacity(REPLY_PREFIX.len() + text.len() + REPLY_SUFFIX.len());
    reply.push_str(REPLY_PREFIX);
    reply.push_str(text);
    reply.push_str(REPLY_SUFFIX);
    reply
}
