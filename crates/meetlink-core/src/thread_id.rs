//! Teams meeting thread identifier: grammar and normalization.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Full thread identifier, optionally preceded by a marker seen in the wild
/// (`threadId=` in meeting-options links, `meetup-join/` in invite links,
/// `l/chat/` in already-clean links). The separator after `19` is either the
/// canonical `:` or the `_` used by the `threadId=` query form.
static THREAD_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:threadId=|meetup-join/|l/chat/)?(19[:_]meeting_[A-Za-z0-9+/-]+@thread\.v2)")
        .expect("thread id pattern is valid")
});

/// Unique identifier of a Teams meeting chat thread, stored in the canonical
/// colon form `19:meeting_<token>@thread.v2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadId(String);

impl ThreadId {
    /// Scans `text` left to right and returns the first thread identifier.
    ///
    /// Multiple candidates in one input are not disambiguated; the first
    /// match wins. Identifiers in the `19_` form are normalized to `19:`.
    pub fn find_in(text: &str) -> Option<ThreadId> {
        let caps = THREAD_ID_RE.captures(text)?;
        let raw = caps.get(1)?.as_str();
        Some(Self::normalize(raw))
    }

    /// Canonicalizes the separator: the `threadId=` query form uses `19_`
    /// where the application expects `19:`.
    fn normalize(raw: &str) -> ThreadId {
        match raw.strip_prefix("19_") {
            Some(rest) => ThreadId(format!("19:{}", rest)),
            None => ThreadId(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ThreadId> for String {
    fn from(id: ThreadId) -> String {
        id.0
    }
}
