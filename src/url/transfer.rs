//! The clipboard and drag-and-drop interchange payloads: a list of URLs
//! in canonical form, and the flat metadata blob that rides along with
//! one.

use super::{Trailing, Url};


/// The separator between metadata keys and values, and between pairs.
const METADATA_SEPARATOR: &str = "$@@$";


/// Encodes a list of URLs as the interchange payload: canonical forms,
/// `\r\n`-separated.
pub fn encode_url_list(urls: &[Url]) -> String {
    let lines: Vec<String> = urls.iter().map(|url| url.url(Trailing::Leave)).collect();
    lines.join("\r\n")
}

/// Decodes an interchange payload into URLs. Blank lines and lines
/// starting with `#` are comments and skipped.
pub fn decode_url_list(payload: &str) -> Vec<Url> {
    payload.split("\r\n")
           .flat_map(|chunk| chunk.split('\n'))
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(Url::new)
           .collect()
}

/// Encodes metadata pairs as the flat `key$@@$value$@@$...` blob.
pub fn encode_metadata(pairs: &[(String, String)]) -> String {
    let mut parts = Vec::with_capacity(pairs.len() * 2);

    for (key, value) in pairs {
        parts.push(key.as_str());
        parts.push(value.as_str());
    }

    parts.join(METADATA_SEPARATOR)
}

/// Decodes a metadata blob back into pairs, in order. A trailing key
/// with no value is dropped.
pub fn decode_metadata(blob: &str) -> Vec<(String, String)> {
    if blob.is_empty() {
        return Vec::new();
    }

    let parts: Vec<&str> = blob.split(METADATA_SEPARATOR).collect();

    parts.chunks_exact(2)
         .map(|pair| (pair[0].to_string(), pair[1].to_string()))
         .collect()
}
