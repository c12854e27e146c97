//! URI validation and percent-encoding helpers.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Punctuation permitted in a request URI alongside letters and digits.
const URI_PUNCT: &[u8] = b"/?%&=+-*._@,~";

/// Everything except unreserved characters gets percent-encoded.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Checks a request URI against the allowed character set. Anything else
/// (raw spaces, angle brackets, control bytes) is a validation failure that
/// the connection answers with 400.
pub fn validate_uri(uri: &str) -> bool {
    !uri.is_empty()
        && uri
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || URI_PUNCT.contains(&b))
}

/// Percent-encodes everything outside the unreserved set.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, ENCODE_SET).to_string()
}

/// Decodes percent escapes; returns None if the result is not valid UTF-8.
pub fn percent_decode(input: &str) -> Option<String> {
    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// RFC 7230 token characters, the legal alphabet for header field names.
pub fn is_valid_header_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_paths_with_query_strings() {
        assert!(validate_uri("/a/b?x=1&y=2"));
        assert!(validate_uri("/index.html"));
        assert!(validate_uri("/~user/file_name,v2@rev"));
    }

    #[test]
    fn rejects_spaces_and_markup() {
        assert!(!validate_uri("/a b"));
        assert!(!validate_uri("/<script>"));
        assert!(!validate_uri(""));
    }

    #[test]
    fn percent_round_trip() {
        let encoded = percent_encode("a b/c");
        assert_eq!(encoded, "a%20b%2Fc");
        assert_eq!(percent_decode(&encoded).unwrap(), "a b/c");
    }

    #[test]
    fn header_name_alphabet() {
        assert!(is_valid_header_name("Content-Length"));
        assert!(is_valid_header_name("X-Custom_1"));
        assert!(!is_valid_header_name("Bad Header"));
        assert!(!is_valid_header_name(""));
    }
}
