use crate::character_sets::is_separator;
use crate::checkers::{is_scheme, parse_port, starts_with_drive};
use crate::compat::{String, ToString, Vec};
use crate::error::ParseError;
use crate::helpers::{clean_tabs_and_newlines, find_separator, prune_fragment, prune_query};
use crate::record::{PathParts, Port, UrlRecord};
use crate::scheme::get_scheme_type;
use crate::types::Mode;

/// Parse a URL string into a record.
///
/// `mode` applies until a scheme is found; the scheme's own mode is used
/// for the rest of the input.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPort`] for a port that is not a number
/// below 65536.
pub fn parse(input: &str, mode: Mode) -> Result<UrlRecord, ParseError> {
    let input = clean_tabs_and_newlines(input);
    let (input, fragment) = prune_fragment(input.as_ref());
    let (mut rest, query) = prune_query(input);

    let mut record = UrlRecord {
        query: query.map(ToString::to_string),
        hash: fragment.map(ToString::to_string),
        ..UrlRecord::default()
    };

    let mut mode = mode;
    if let Some((scheme, after)) = split_scheme(rest) {
        mode = get_scheme_type(scheme).mode();
        record.scheme = Some(scheme.to_string());
        rest = after;
    }

    if let Some(after) = strip_authority_marker(rest, mode) {
        let end = find_separator(after, mode).unwrap_or(after.len());
        parse_authority(&after[..end], &mut record)?;
        rest = &after[end..];
    }

    record.set_path(parse_path(rest, mode));
    Ok(record)
}

/// Parse a path string into drive, root, dirs and file.
///
/// The input is taken literally: `?` and `#` are ordinary characters here.
pub fn parse_path(input: &str, mode: Mode) -> PathParts {
    let bytes = input.as_bytes();
    let mut parts = PathParts::default();
    let mut rest = input;

    if mode.detects_drive() {
        if starts_with_drive(rest, mode) {
            parts.drive = Some(rest[..2].to_string());
            rest = &rest[2..];
        } else if bytes.first().is_some_and(|&b| is_separator(b, mode))
            && starts_with_drive(&rest[1..], mode)
        {
            parts.drive = Some(rest[1..3].to_string());
            rest = &rest[3..];
        }
    }

    if rest.as_bytes().first().is_some_and(|&b| is_separator(b, mode)) {
        parts.root = true;
        rest = &rest[1..];
    }

    if rest.is_empty() {
        return parts;
    }

    let mut segments: Vec<String> = rest
        .split(|c: char| c.is_ascii() && is_separator(c as u8, mode))
        .map(ToString::to_string)
        .collect();

    // A trailing empty, '.' or '..' segment names a directory
    match segments.pop() {
        Some(last) if last.is_empty() => {}
        Some(last) if last == "." || last == ".." => segments.push(last),
        Some(last) => parts.file = Some(last),
        None => {}
    }
    parts.dirs = segments;
    parts
}

/// Split a leading `scheme:` off the input
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = memchr::memchr(b':', input.as_bytes())?;
    let scheme = &input[..colon];
    is_scheme(scheme).then(|| (scheme, &input[colon + 1..]))
}

/// Strip the two separators that introduce an authority
fn strip_authority_marker(input: &str, mode: Mode) -> Option<&str> {
    match input.as_bytes() {
        [a, b, ..] if is_separator(*a, mode) && is_separator(*b, mode) => Some(&input[2..]),
        _ => None,
    }
}

/// Parse `user:pass@host:port` into the record
fn parse_authority(authority: &str, record: &mut UrlRecord) -> Result<(), ParseError> {
    let host_port = match authority.rfind('@') {
        Some(at) => {
            let userinfo = &authority[..at];
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    record.user = Some(user.to_string());
                    record.pass = Some(pass.to_string());
                }
                None => record.user = Some(userinfo.to_string()),
            }
            &authority[at + 1..]
        }
        None => authority,
    };

    let (host, port) = split_host_port(host_port);
    record.host = Some(host.to_string());
    record.port = match port {
        None => None,
        Some("") => Some(Port::Empty),
        Some(digits) => Some(Port::Number(
            parse_port(digits).ok_or(ParseError::InvalidPort)?,
        )),
    };
    Ok(())
}

/// Split host and port; IPv6 literals lose their brackets
fn split_host_port(input: &str) -> (&str, Option<&str>) {
    if let Some(bracketed) = input.strip_prefix('[') {
        if let Some(end) = bracketed.find(']') {
            let port = bracketed[end + 1..].strip_prefix(':');
            return (&bracketed[..end], port);
        }
        return (input, None);
    }
    match input.rfind(':') {
        Some(colon) => (&input[..colon], Some(&input[colon + 1..])),
        None => (input, None),
    }
}
