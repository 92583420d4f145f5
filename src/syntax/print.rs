use super::{Style, mode_for};
use crate::checkers::is_drive_segment;
use crate::compat::{Cow, String, ToString, format};
use crate::record::UrlRecord;
use crate::types::Mode;
use crate::unicode::percent_encode::{
    FRAGMENT_SET, QUERY_SET, SEGMENT_SET, SPECIAL_QUERY_SET, SPECIAL_SEGMENT_SET, USERINFO_SET,
    escape_delimiters_into, percent_encode_into,
};

/// Serialize a record in the given style.
pub fn print(record: &UrlRecord, style: Style) -> String {
    let mode = mode_for(record, Mode::NoScheme);
    let mut out = String::new();

    if let Some(scheme) = &record.scheme {
        out.push_str(scheme);
        out.push(':');
    }

    let authority = record.host.is_some() || (style == Style::Whatwg && mode == Mode::File);
    if authority {
        out.push_str("//");
        if let Some(user) = &record.user {
            write_userinfo(&mut out, user, style, mode);
            if let Some(pass) = &record.pass {
                out.push(':');
                write_userinfo(&mut out, pass, style, mode);
            }
            out.push('@');
        }
        if let Some(host) = &record.host {
            out.push_str(&print_host(host));
        }
        if let Some(port) = record.port {
            out.push(':');
            out.push_str(&port.to_string());
        }
    } else if needs_dot_prefix(record, mode) {
        out.push_str("./");
    } else if record.drive.is_none() && record.root && record.dirs.first().is_some_and(String::is_empty) {
        // `//` at the start of the path would read as an authority
        out.push_str("/.");
    }

    write_path(&mut out, record, style, mode, authority);

    if let Some(query) = &record.query {
        out.push('?');
        match style {
            Style::Url => escape_delimiters_into(&mut out, query, b"#"),
            Style::Whatwg if mode == Mode::Generic => percent_encode_into(&mut out, query, QUERY_SET),
            Style::Whatwg => percent_encode_into(&mut out, query, SPECIAL_QUERY_SET),
        }
    }

    if let Some(hash) = &record.hash {
        out.push('#');
        match style {
            Style::Url => out.push_str(hash),
            Style::Whatwg => percent_encode_into(&mut out, hash, FRAGMENT_SET),
        }
    }
    out
}

/// Print a host; IPv6 literals get their brackets back.
pub fn print_host(host: &str) -> Cow<'_, str> {
    if host.contains(':') && !host.starts_with('[') {
        Cow::Owned(format!("[{host}]"))
    } else {
        Cow::Borrowed(host)
    }
}

/// The path of a record: drive, root, dirs and file.
/// A record without path components yields the empty string.
pub fn pathname(record: &UrlRecord) -> String {
    let mut out = String::new();
    let mode = mode_for(record, Mode::NoScheme);
    write_path(&mut out, record, Style::Url, mode, record.host.is_some());
    out
}

/// Whether a root-less relative path must be printed behind `./` so that
/// its first segment is not read as a scheme, a drive or a root.
fn needs_dot_prefix(record: &UrlRecord, mode: Mode) -> bool {
    if record.drive.is_some() || record.root {
        return false;
    }
    let Some(first) = record.dirs.first().or(record.file.as_ref()) else {
        return false;
    };
    first.is_empty()
        || (record.scheme.is_none() && first.contains(':'))
        || (mode.detects_drive() && is_drive_segment(first))
}

fn write_path(out: &mut String, record: &UrlRecord, style: Style, mode: Mode, after_authority: bool) {
    if let Some(drive) = &record.drive {
        if after_authority {
            out.push('/');
        }
        out.push_str(drive);
    } else if after_authority && !record.root && record.has_path() {
        out.push('/');
    }

    if record.root {
        out.push('/');
    }
    for dir in &record.dirs {
        write_segment(out, dir, style, mode);
        out.push('/');
    }
    if let Some(file) = &record.file {
        write_segment(out, file, style, mode);
    }
}

fn write_segment(out: &mut String, segment: &str, style: Style, mode: Mode) {
    let backslash = mode.backslash_is_separator();
    match style {
        Style::Url if backslash => escape_delimiters_into(out, segment, b"/\\?#"),
        Style::Url => escape_delimiters_into(out, segment, b"/?#"),
        Style::Whatwg if backslash => percent_encode_into(out, segment, SPECIAL_SEGMENT_SET),
        Style::Whatwg => percent_encode_into(out, segment, SEGMENT_SET),
    }
}

fn write_userinfo(out: &mut String, value: &str, style: Style, mode: Mode) {
    match style {
        Style::Url if mode.backslash_is_separator() => {
            escape_delimiters_into(out, value, b":@/\\?#");
        }
        Style::Url => escape_delimiters_into(out, value, b":@/?#"),
        Style::Whatwg => percent_encode_into(out, value, USERINFO_SET),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compat::{ToString, vec};
    use crate::record::Port;
    use crate::syntax::parse;

    #[test]
    fn test_print_styles() {
        let record = parse("file:C:/My Docs/ü.txt?a b#c d", Mode::NoScheme).unwrap();
        assert_eq!(print(&record, Style::Url), "file:C:/My Docs/ü.txt?a b#c d");
        assert_eq!(
            print(&record, Style::Whatwg),
            "file:///C:/My%20Docs/%C3%BC.txt?a%20b#c%20d"
        );
    }

    #[test]
    fn test_print_escapes_delimiters_in_segments() {
        let record = UrlRecord {
            scheme: Some("http".to_string()),
            host: Some("h".to_string()),
            root: true,
            dirs: vec!["a/b".to_string()],
            file: Some("c?d#e".to_string()),
            ..UrlRecord::default()
        };
        assert_eq!(print(&record, Style::Url), "http://h/a%2Fb/c%3Fd%23e");
    }

    #[test]
    fn test_print_userinfo_and_port() {
        let record = UrlRecord {
            scheme: Some("ftp".to_string()),
            user: Some("a@b".to_string()),
            pass: Some("p:w".to_string()),
            host: Some("h".to_string()),
            port: Some(Port::Empty),
            ..UrlRecord::default()
        };
        assert_eq!(print(&record, Style::Url), "ftp://a%40b:p%3Aw@h:");
    }

    #[test]
    fn test_print_guards() {
        let colon = parse("./a:b", Mode::NoScheme).unwrap();
        assert_eq!(print(&colon, Style::Url), "./a:b");

        let double = UrlRecord {
            root: true,
            dirs: vec![String::new()],
            file: Some("x".to_string()),
            ..UrlRecord::default()
        };
        assert_eq!(print(&double, Style::Url), "/.//x");
    }

    #[test]
    fn test_print_host() {
        assert_eq!(print_host("::1"), "[::1]");
        assert_eq!(print_host("example.com"), "example.com");
    }

    #[test]
    fn test_pathname() {
        let record = parse("http://h/a/b/c", Mode::NoScheme).unwrap();
        assert_eq!(pathname(&record), "/a/b/c");

        let record = parse("C:\\foo\\bar.txt", Mode::NoScheme).unwrap();
        assert_eq!(pathname(&record), "C:/foo/bar.txt");

        let record = parse("file:///C:/x", Mode::NoScheme).unwrap();
        assert_eq!(pathname(&record), "/C:/x");

        let record = parse("?q", Mode::NoScheme).unwrap();
        assert_eq!(pathname(&record), "");
    }
}
