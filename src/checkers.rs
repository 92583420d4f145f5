use crate::character_sets::{is_scheme_byte, is_separator};
use crate::types::Mode;

/// Check if a string is a valid scheme: an ASCII letter followed by at
/// least one letter, digit, `+`, `-` or `.`.
///
/// Single letters are excluded so that `C:` is always read as a drive.
pub fn is_scheme(input: &str) -> bool {
    let bytes = input.as_bytes();
    match bytes.split_first() {
        Some((first, rest)) => {
            first.is_ascii_alphabetic() && !rest.is_empty() && rest.iter().all(|&b| is_scheme_byte(b))
        }
        None => false,
    }
}

/// Check if a string is a drive letter as accepted by the drive-letter
/// setter: a letter optionally followed by `:` or `|`.
pub fn is_drive_letter_input(input: &str) -> bool {
    match input.as_bytes() {
        [letter] => letter.is_ascii_alphabetic(),
        [letter, sep] => letter.is_ascii_alphabetic() && matches!(sep, b':' | b'|'),
        _ => false,
    }
}

/// Check if a path segment has the shape of a drive letter (`C:` or `C|`)
pub fn is_drive_segment(segment: &str) -> bool {
    matches!(segment.as_bytes(), [letter, b':' | b'|'] if letter.is_ascii_alphabetic())
}

/// Check if the input starts with a drive letter that is followed by a
/// separator or the end of the input.
pub fn starts_with_drive(input: &str, mode: Mode) -> bool {
    let bytes = input.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && matches!(bytes[1], b':' | b'|')
        && (bytes.len() == 2 || is_separator(bytes[2], mode))
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scheme() {
        assert!(is_scheme("http"));
        assert!(is_scheme("svn+ssh"));
        assert!(is_scheme("a1.b-c"));
        assert!(!is_scheme("c"));
        assert!(!is_scheme(""));
        assert!(!is_scheme("1http"));
        assert!(!is_scheme("ht tp"));
        assert!(!is_scheme("http:"));
    }

    #[test]
    fn test_is_drive_letter_input() {
        assert!(is_drive_letter_input("C"));
        assert!(is_drive_letter_input("c:"));
        assert!(is_drive_letter_input("D|"));
        assert!(!is_drive_letter_input("CD"));
        assert!(!is_drive_letter_input("1:"));
        assert!(!is_drive_letter_input(""));
        assert!(!is_drive_letter_input("C:/"));
    }

    #[test]
    fn test_starts_with_drive() {
        assert!(starts_with_drive("C:", Mode::File));
        assert!(starts_with_drive("C:/foo", Mode::File));
        assert!(starts_with_drive("c|\\foo", Mode::NoScheme));
        assert!(!starts_with_drive("C:foo", Mode::File));
        assert!(!starts_with_drive("CC:/", Mode::File));
        assert!(!starts_with_drive("C:\\foo", Mode::Generic));
        assert!(!starts_with_drive("日本", Mode::File));
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("80"), Some(80));
        assert_eq!(parse_port("0080"), Some(80));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port("65536"), None); // Out of range
        assert_eq!(parse_port("abc"), None);
        assert_eq!(parse_port(""), None);
    }
}
