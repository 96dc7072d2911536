//! Canonical chat deep-link construction.

use crate::thread_id::ThreadId;

/// Base of the chat deep link; the thread identifier is appended directly.
const CHAT_LINK_BASE: &str = "https://teams.microsoft.com/l/chat/";

/// Fixed `/conversations` path plus the pre-encoded `{"contextType":"chat"}`
/// context parameter. A literal constant, not computed per input.
const CHAT_LINK_SUFFIX: &str = "/conversations?context=%7B%22contextType%22%3A%22chat%22%7D";

/// Builds the canonical deep link that opens the chat view for `id`.
pub fn chat_deep_link(id: &ThreadId) -> String {
    format!("{}{}{}", CHAT_LINK_BASE, id.as_str(), CHAT_LINK_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

    fn id(text: &str) -> ThreadId {
        ThreadId::find_in(text).unwrap()
    }

    #[test]
    fn builds_exact_link() {
        let link = chat_deep_link(&id("19:meeting_XyZ12-34@thread.v2"));
        assert_eq!(
            link,
            "https://teams.microsoft.com/l/chat/19:meeting_XyZ12-34@thread.v2/conversations?context=%7B%22contextType%22%3A%22chat%22%7D"
        );
    }

    #[test]
    fn suffix_is_encoded_chat_context() {
        // The constant must stay in sync with the JSON object it encodes.
        let json = serde_json::json!({"contextType": "chat"}).to_string();
        let encoded = utf8_percent_encode(&json, NON_ALPHANUMERIC).to_string();
        assert_eq!(
            CHAT_LINK_SUFFIX,
            format!("/conversations?context={}", encoded)
        );
    }
}
