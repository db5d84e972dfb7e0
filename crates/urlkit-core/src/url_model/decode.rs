//! Percent-decoding pre-pass.

use percent_encoding::percent_decode_str;

/// Appends the decoded form of `src` to `dst`.
///
/// `%XX` escapes become the byte they name and `+` becomes a space. Escapes
/// that are not followed by two hex digits are kept literally, and decoded
/// bytes that are not valid UTF-8 are replaced with U+FFFD. The output is
/// never longer than `src`.
pub fn decode_url_into(dst: &mut String, src: &str) {
    for (i, piece) in src.split('+').enumerate() {
        if i > 0 {
            dst.push(' ');
        }
        dst.push_str(&percent_decode_str(piece).decode_utf8_lossy());
    }
}
