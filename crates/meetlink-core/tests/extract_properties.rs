//! End-to-end properties of the extraction pipeline.

use meetlink_core::decode::{decode_repeatedly, MAX_DECODE_PASSES};
use meetlink_core::extract::extract;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use url::Url;

const CANONICAL_ID: &str = "19:meeting_abcDEF-123@thread.v2";

/// Wraps `input` in `times` layers of percent-encoding, encoding the `%`
/// signs of earlier layers on each pass.
fn encode_times(input: &str, times: usize) -> String {
    let mut out = input.to_string();
    for _ in 0..times {
        out = utf8_percent_encode(&out, NON_ALPHANUMERIC).to_string();
    }
    out
}

#[test]
fn unrecognizable_inputs_yield_not_found() {
    assert!(extract("hello world, no meeting here").is_none());
    assert!(extract("https://example.com/calendar?id=12345").is_none());
    // Mentions a meeting but has the wrong shape.
    assert!(extract("meeting_abc without prefix or suffix").is_none());
    // Still unrecognizable after full decoding.
    assert!(extract(&encode_times("no identifier in here", 2)).is_none());
}

#[test]
fn canonical_identifier_is_returned_unchanged() {
    let found = extract(CANONICAL_ID).unwrap();
    assert_eq!(found.thread_id.as_str(), CANONICAL_ID);
}

#[test]
fn underscore_form_is_colon_normalized() {
    let found = extract("19_meeting_abcDEF-123@thread.v2").unwrap();
    assert_eq!(found.thread_id.as_str(), CANONICAL_ID);
}

#[test]
fn twice_encoded_identifier_matches_plain_case() {
    let plain = extract(CANONICAL_ID).unwrap();
    let encoded = extract(&encode_times(CANONICAL_ID, 2)).unwrap();
    assert_eq!(encoded, plain);
}

#[test]
fn five_encoding_layers_still_resolve() {
    let input = encode_times(CANONICAL_ID, MAX_DECODE_PASSES);
    let found = extract(&input).unwrap();
    assert_eq!(found.thread_id.as_str(), CANONICAL_ID);
}

#[test]
fn six_encoding_layers_exceed_the_decode_bound() {
    assert_eq!(MAX_DECODE_PASSES, 5);
    let input = encode_times(CANONICAL_ID, MAX_DECODE_PASSES + 1);
    // One layer remains after the bounded decode, so the pattern cannot
    // match. Expected bounded behavior, not a defect.
    assert!(decode_repeatedly(&input).contains('%'));
    assert!(extract(&input).is_none());
}

#[test]
fn meetup_join_wrapper_end_to_end() {
    let input =
        "https://teams.microsoft.com/l/meetup-join/19%253ameeting_XyZ12-34%2540thread.v2/1600000000000?context=%7b%22Tid%22%3a%22t%22%7d";
    let found = extract(input).unwrap();
    assert_eq!(
        found.link,
        "https://teams.microsoft.com/l/chat/19:meeting_XyZ12-34@thread.v2/conversations?context=%7B%22contextType%22%3A%22chat%22%7D"
    );
}

#[test]
fn meeting_options_wrapper_end_to_end() {
    let input = "https://teams.microsoft.com/meetingOptions/?organizerId=x&tenantId=y&threadId=19_meeting_NzY4abc@thread.v2&messageId=0&language=en-US";
    let found = extract(input).unwrap();
    assert_eq!(found.thread_id.as_str(), "19:meeting_NzY4abc@thread.v2");
}

#[test]
fn constructed_link_is_a_well_formed_url() {
    let found = extract(CANONICAL_ID).unwrap();
    let url = Url::parse(&found.link).unwrap();
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("teams.microsoft.com"));
    assert!(url.path().starts_with("/l/chat/"));
    assert!(url.path().ends_with("/conversations"));

    // The fixed context parameter decodes back to the JSON object.
    let (key, value) = url.query_pairs().next().unwrap();
    assert_eq!(key, "context");
    assert_eq!(value, r#"{"contextType":"chat"}"#);
}
