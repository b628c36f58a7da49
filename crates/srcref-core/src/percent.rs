//! Percent-encoding of paths placed into `file:` URLs, and the reverse.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters a URL parser would otherwise read as delimiters or rewrite.
/// `\` is a separator in special-scheme URLs; controls are stripped.
const PATH_ESCAPE: &AsciiSet = &CONTROLS.add(b'%').add(b'#').add(b'?').add(b'\\');

/// Escapes `path` for use as the path component of a `file:` URL.
/// Other printable ASCII, spaces included, stays literal; non-ASCII is escaped.
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_ESCAPE).to_string()
}

/// Decodes `%XX` escapes. Malformed escapes are kept literally and invalid
/// UTF-8 is replaced, so this never fails.
pub fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
