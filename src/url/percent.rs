//! Percent-encoding and -decoding primitives, shared by parsing and
//! rendering. Each part of a URL has its own encode set; decoding is
//! uniform and lossy-UTF-8, so a malformed escape never fails outright.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};


/// Bytes encoded in the userinfo part.
pub const USERINFO: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'<').add(b'>').add(b'`')
    .add(b'#').add(b'?').add(b'/').add(b':').add(b';')
    .add(b'=').add(b'@').add(b'[').add(b']').add(b'\\')
    .add(b'^').add(b'{').add(b'}').add(b'|').add(b'%');

/// Bytes encoded in the path for the canonical rendering.
pub const PATH: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'<').add(b'>').add(b'`')
    .add(b'#').add(b'?').add(b'{').add(b'}')
    .add(b'[').add(b']').add(b'%');

/// Raw bytes repaired on the fly inside an already-encoded query. `%` is
/// deliberately not here: existing escapes pass through untouched.
pub const QUERY: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'<').add(b'>').add(b'#');

/// Raw bytes repaired on the fly inside an already-encoded fragment.
pub const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// The set for query-item keys and values, where the item delimiters are
/// significant too. `+` is deliberately left alone.
pub const QUERY_ITEM: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'<').add(b'>').add(b'#')
    .add(b'&').add(b'=').add(b'%');

/// The minimal set for pretty-printing: only what would change the parse
/// or be invisible.
pub const PRETTY: &AsciiSet = &CONTROLS.add(b'#').add(b'%');


/// Percent-encodes every byte of the text that is in the given set.
pub fn encode(text: &str, set: &'static AsciiSet) -> String {
    utf8_percent_encode(text, set).to_string()
}

/// Percent-decodes the text. Escapes that don’t form valid UTF-8 are
/// replaced rather than rejected.
pub fn decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn spaces_are_encoded() {
        assert_eq!(encode("a b", PATH), "a%20b");
    }

    #[test]
    fn decoding_round_trips() {
        assert_eq!(decode("a%20b%2Fc"), "a b/c");
    }

    #[test]
    fn existing_escapes_survive_query_repair() {
        assert_eq!(encode("a%20b c", QUERY), "a%20b%20c");
    }

    #[test]
    fn plus_is_left_alone() {
        assert_eq!(encode("b+c", QUERY_ITEM), "b+c");
    }

    #[test]
    fn bad_escapes_decode_lossily() {
        // An isolated percent sign is passed through as-is.
        assert_eq!(decode("100%"), "100%");
    }
}
