use crate::compat::{String, ToString, Vec};
use crate::record::{Port, UrlRecord};
use crate::scheme::get_scheme_type;
use crate::types::{Mode, SchemeType};
use crate::unicode::idna::normalize_host;

/// Canonicalize a record without changing what it refers to.
pub fn normalize(record: &UrlRecord) -> UrlRecord {
    let mut result = record.clone();
    let scheme_type = result
        .scheme
        .as_deref()
        .map_or(SchemeType::NotSpecial, get_scheme_type);

    if let Some(scheme) = result.scheme.as_mut() {
        scheme.make_ascii_lowercase();
    }

    result.port = match result.port {
        Some(Port::Empty) => None,
        Some(Port::Number(port)) if scheme_type.default_port() == Some(port) => None,
        port => port,
    };

    if let Some(host) = result.host.as_mut() {
        match scheme_type.mode() {
            Mode::Web => *host = normalize_host(host),
            Mode::File => {
                host.make_ascii_lowercase();
                if host == "localhost" {
                    host.clear();
                }
            }
            Mode::Generic | Mode::NoScheme => {}
        }
    }

    if let Some(drive) = result.drive.as_mut()
        && drive.ends_with('|')
    {
        drive.pop();
        drive.push(':');
    }

    remove_dot_segments(&mut result);

    if scheme_type.mode() == Mode::Web && result.host.is_some() && !result.has_path() {
        result.root = true;
    }
    result.ensure_root();
    result
}

/// Remove `.` and `..` segments from dirs and file.
///
/// A `..` that has nothing to pop is dropped from absolute paths and kept
/// in relative ones.
fn remove_dot_segments(record: &mut UrlRecord) {
    let mut segments: Vec<String> = core::mem::take(&mut record.dirs);
    if record.file.as_deref().is_some_and(|file| file == "." || file == "..") {
        segments.extend(record.file.take());
    }

    let absolute = record.root || record.host.is_some() || record.drive.is_some();
    let mut dirs: Vec<String> = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment.as_str() {
            "." => {}
            ".." => {
                if dirs.last().is_some_and(|last| last != "..") {
                    dirs.pop();
                } else if !absolute {
                    dirs.push("..".to_string());
                }
            }
            _ => dirs.push(segment),
        }
    }
    record.dirs = dirs;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::syntax::{Style, parse, print};

    fn normalized(input: &str) -> String {
        print(&normalize(&parse(input, Mode::NoScheme).unwrap()), Style::Url)
    }

    #[test]
    fn test_normalize_web_url() {
        assert_eq!(normalized("HTTP://Example.COM:80"), "http://example.com/");
        assert_eq!(normalized("https://h:443/a"), "https://h/a");
        assert_eq!(normalized("https://h:8443/a"), "https://h:8443/a");
        assert_eq!(normalized("http://h:/a"), "http://h/a");
    }

    #[test]
    fn test_normalize_dot_segments() {
        assert_eq!(normalized("http://h/a/./b/../c"), "http://h/a/c");
        assert_eq!(normalized("http://h/../../x"), "http://h/x");
        assert_eq!(normalized("a/../../b"), "../b");
        assert_eq!(normalized("http://h/a/b/.."), "http://h/a/");
    }

    #[test]
    fn test_normalize_file_url() {
        assert_eq!(normalized("FILE://localhost/c|/x"), "file:///c:/x");
    }

    #[test]
    fn test_normalize_keeps_generic_host_case() {
        assert_eq!(normalized("Foo://Host/x"), "foo://Host/x");
    }
}
