//! Bounded iterative percent-decoding.
//!
//! Links forwarded through mail clients or calendar wrappers (e.g. Google
//! Calendar) arrive percent-encoded more than once. Decoding repeats until
//! the text stops changing, with a hard pass limit against pathological
//! input.

use percent_encoding::percent_decode_str;

/// Maximum number of decode passes. Input encoded more deeply than this may
/// legitimately fail to resolve downstream.
pub const MAX_DECODE_PASSES: usize = 5;

/// Repeatedly percent-decode `input` until a fixed point or the pass limit.
///
/// A decode failure mid-loop (decoded bytes are not valid UTF-8) stops the
/// loop and yields the last successfully decoded value. The failure is
/// logged, never propagated.
pub fn decode_repeatedly(input: &str) -> String {
    let mut current = input.to_string();
    for pass in 0..MAX_DECODE_PASSES {
        match percent_decode_str(&current).decode_utf8() {
            Ok(decoded) => {
                if decoded == current.as_str() {
                    break;
                }
                current = decoded.into_owned();
            }
            Err(err) => {
                tracing::warn!(
                    "percent-decoding stopped after {} passes ({}); using last decoded value",
                    pass,
                    err
                );
                break;
            }
        }
    }
    current
}
