//! The extraction pipeline: decode, find the thread identifier, build the
//! canonical link.
//!
//! Pure and deterministic; the only side effect is diagnostic logging.
//! Not-found is the single failure condition and carries no further detail.

use crate::decode::decode_repeatedly;
use crate::deep_link::chat_deep_link;
use crate::thread_id::ThreadId;

/// Successful extraction: the normalized identifier and the canonical link
/// built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub thread_id: ThreadId,
    pub link: String,
}

/// Extracts the first thread identifier from `raw` and builds its deep link.
///
/// `raw` may be a bare identifier, a meetup-join invite URL, a
/// meeting-options URL, or any of those wrapped and percent-encoded several
/// times by a mail client or calendar. Empty or unrecognized input yields
/// `None`.
pub fn extract(raw: &str) -> Option<Extracted> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let decoded = decode_repeatedly(trimmed);
    let thread_id = match ThreadId::find_in(&decoded) {
        Some(id) => id,
        None => {
            tracing::debug!("no thread identifier found after decoding");
            return None;
        }
    };

    tracing::debug!("extracted thread identifier {}", thread_id);
    let link = chat_deep_link(&thread_id);
    Some(Extracted { thread_id, link })
}
