use crate::compat::String;

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if any label of a domain carries the Punycode `xn--` prefix
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    is_punycode_prefix(bytes)
        || memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Canonical form of a web host.
///
/// Plain ASCII hosts are lower-cased; Unicode, percent-encoded and Punycode
/// hosts go through IDNA `ToASCII`. IP literals (containing ':') and hosts
/// rejected by IDNA are only lower-cased.
pub fn normalize_host(host: &str) -> String {
    if host.contains(':') || (host.is_ascii() && !host.contains('%') && !has_punycode(host)) {
        return host.to_ascii_lowercase();
    }
    idna::domain_to_ascii(host).unwrap_or_else(|_| host.to_ascii_lowercase())
}
