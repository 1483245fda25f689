//! Percent-encoding for URI labels and query components.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except the RFC 3986 unreserved characters (`A-Z a-z 0-9 - _ . ~`).
///
/// Unlike a plain component encoder this also escapes `!`, `'`, `(`, `)` and `*`.
const EXTENDED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single URI component with the extended set.
///
/// # Examples
///
/// ```
/// use skyport_core::encoding::extended_encode;
///
/// assert_eq!(extended_encode("my domain"), "my%20domain");
/// assert_eq!(extended_encode("a/b!(c)"), "a%2Fb%21%28c%29");
/// ```
#[must_use]
pub fn extended_encode(value: &str) -> String {
    utf8_percent_encode(value, EXTENDED_ENCODE_SET).to_string()
}
