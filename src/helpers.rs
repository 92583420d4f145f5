use crate::character_sets::{is_ascii_tab_or_newline, is_c0_control_or_space};
use crate::compat::Cow;
use crate::types::Mode;

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Split the fragment off a URL string.
/// The fragment is returned without its leading '#'.
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split the query off a fragment-less URL string.
/// The query is returned without its leading '?'.
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Position of the first path separator for the given mode
pub fn find_separator(input: &str, mode: Mode) -> Option<usize> {
    let bytes = input.as_bytes();
    if mode.backslash_is_separator() {
        memchr::memchr2(b'/', b'\\', bytes)
    } else {
        memchr::memchr(b'/', bytes)
    }
}

/// Combined trim and remove tabs/newlines in single pass.
/// Returns a Cow to avoid allocation when possible.
pub fn clean_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();

    let start = bytes
        .iter()
        .position(|&b| !is_c0_control_or_space(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_c0_control_or_space(b))
        .map_or(0, |pos| pos + 1);

    if start >= end {
        return Cow::Borrowed("");
    }

    let trimmed = &input[start..end];
    if !has_tabs_or_newline(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_tabs_and_newlines() {
        assert_eq!(clean_tabs_and_newlines("\t\nhello\r\n"), "hello");
        assert_eq!(clean_tabs_and_newlines("hello"), "hello");
        assert_eq!(clean_tabs_and_newlines("\t\n\r"), "");
        assert_eq!(clean_tabs_and_newlines("hel\tlo\nworld"), "helloworld");
        assert_eq!(clean_tabs_and_newlines("  a b  "), "a b");
    }

    #[test]
    fn test_prune_query_and_fragment() {
        let (rest, fragment) = prune_fragment("a?b#c?d");
        assert_eq!(fragment, Some("c?d"));
        assert_eq!(prune_query(rest), ("a", Some("b")));
        assert_eq!(prune_query("a"), ("a", None));
        assert_eq!(prune_fragment("#"), ("", Some("")));
    }

    #[test]
    fn test_find_separator() {
        assert_eq!(find_separator("ab\\c/d", Mode::Web), Some(2));
        assert_eq!(find_separator("ab\\c/d", Mode::Generic), Some(4));
        assert_eq!(find_separator("abc", Mode::File), None);
    }
}
