use crate::types::SchemeType;

/// Get the scheme type from a scheme string, ignoring ASCII case.
/// Filters by length and first byte before the full comparison.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();
    let is = |name: &[u8]| bytes.eq_ignore_ascii_case(name);

    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'w')) if is(b"ws") => SchemeType::Ws,
        (3, Some(b'w')) if is(b"wss") => SchemeType::Wss,
        (3, Some(b'f')) if is(b"ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if is(b"http") => SchemeType::Http,
        (4, Some(b'f')) if is(b"file") => SchemeType::File,
        (5, Some(b'h')) if is(b"https") => SchemeType::Https,
        _ => SchemeType::NotSpecial,
    }
}

/// Whether an optional scheme is the file scheme (case-insensitive)
pub fn is_file_scheme(scheme: Option<&str>) -> bool {
    scheme.is_some_and(|s| s.eq_ignore_ascii_case("file"))
}
