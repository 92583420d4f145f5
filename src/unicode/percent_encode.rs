use crate::compat::String;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// WHATWG encode sets, see https://url.spec.whatwg.org/#percent-encoded-bytes

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Path percent-encode set
/// Fragment + #, ?, ^, {, }
pub const PATH_SET: &AsciiSet = &FRAGMENT_SET
    .add(b'#')
    .add(b'?')
    .add(b'^')
    .add(b'{')
    .add(b'}');

/// A single path segment: path set + '/'
pub const SEGMENT_SET: &AsciiSet = &PATH_SET.add(b'/');

/// A single path segment of a URL whose mode also splits on '\'
pub const SPECIAL_SEGMENT_SET: &AsciiSet = &SEGMENT_SET.add(b'\\');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'|');

/// Query percent-encode set (for non-special URLs)
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special query percent-encode set (http, https, ws, wss, ftp, file)
/// Query + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Write `input` to the buffer, percent-encoding only the given ASCII
/// delimiters. Everything else, non-ASCII included, is copied verbatim.
pub fn escape_delimiters_into(buffer: &mut String, input: &str, delimiters: &[u8]) {
    buffer.reserve(input.len());
    for c in input.chars() {
        match u8::try_from(c) {
            Ok(b) if delimiters.contains(&b) => {
                buffer.push('%');
                buffer.push(hex_digit(b >> 4));
                buffer.push(hex_digit(b & 0x0F));
            }
            _ => buffer.push(c),
        }
    }
}

fn hex_digit(nibble: u8) -> char {
    char::from(b"0123456789ABCDEF"[usize::from(nibble & 0x0F)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode_into() {
        let mut out = String::new();
        percent_encode_into(&mut out, "a b/c?", SEGMENT_SET);
        assert_eq!(out, "a%20b%2Fc%3F");

        let mut out = String::new();
        percent_encode_into(&mut out, "é", FRAGMENT_SET);
        assert_eq!(out, "%C3%A9");
    }

    #[test]
    fn test_escape_delimiters_into() {
        let mut out = String::new();
        escape_delimiters_into(&mut out, "a/b c#é", b"/#");
        assert_eq!(out, "a%2Fb c%23é");
    }
}
