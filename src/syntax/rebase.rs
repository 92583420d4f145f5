use crate::compat::String;
use crate::error::ParseError;
use crate::record::UrlRecord;
use crate::scheme::{get_scheme_type, is_file_scheme};
use crate::types::Mode;

/// Record components in the order in which they nest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Component {
    Scheme,
    Authority,
    Drive,
    Root,
    Dirs,
    File,
    Query,
    Hash,
}

/// The first component present in the record. An empty record counts as
/// starting at the hash, so that rebasing it drops the base's hash.
fn first_component(record: &UrlRecord) -> Component {
    if record.scheme.is_some() {
        Component::Scheme
    } else if record.host.is_some() {
        Component::Authority
    } else if record.drive.is_some() {
        Component::Drive
    } else if record.root {
        Component::Root
    } else if !record.dirs.is_empty() {
        Component::Dirs
    } else if record.file.is_some() {
        Component::File
    } else if record.query.is_some() {
        Component::Query
    } else {
        Component::Hash
    }
}

/// Rebase `record` on `base`.
///
/// The result takes the components of `base` that come before the first
/// component of `record`, and the components of `record` from there on.
/// When `record` starts at its dirs, the base dirs are prepended.
///
/// # Errors
///
/// Returns [`ParseError::InvalidScheme`] when the result would carry a
/// drive letter under a scheme other than `file`.
pub fn rebase(record: &UrlRecord, base: &UrlRecord) -> Result<UrlRecord, ParseError> {
    let mut order = first_component(record);

    // Legacy relative form: `http:foo` against an http base
    if order == Component::Scheme
        && let (Some(scheme), Some(base_scheme)) = (&record.scheme, &base.scheme)
        && scheme.eq_ignore_ascii_case(base_scheme)
        && get_scheme_type(scheme).is_special()
    {
        let mut schemeless = record.clone();
        schemeless.scheme = None;
        order = first_component(&schemeless);
    }

    let pick = |component: Component| if component < order { base } else { record };

    let authority = pick(Component::Authority);
    let dirs = if order == Component::Dirs {
        base.dirs.iter().chain(&record.dirs).cloned().collect()
    } else {
        pick(Component::Dirs).dirs.clone()
    };

    let mut result = UrlRecord {
        scheme: pick(Component::Scheme).scheme.clone(),
        user: authority.user.clone(),
        pass: authority.pass.clone(),
        host: authority.host.clone(),
        port: authority.port,
        drive: pick(Component::Drive).drive.clone(),
        root: pick(Component::Root).root,
        dirs,
        file: pick(Component::File).file.clone(),
        query: pick(Component::Query).query.clone(),
        hash: pick(Component::Hash).hash.clone(),
    };

    if result.drive.is_some() && result.scheme.is_some() && !is_file_scheme(result.scheme.as_deref()) {
        return Err(ParseError::InvalidScheme);
    }
    result.ensure_root();
    Ok(result)
}

/// Resolve `record` against an optional base into an absolute record.
///
/// Web URLs without a host take their host from the first non-empty path
/// segment; file URLs without a host get the empty host.
///
/// # Errors
///
/// Returns [`ParseError::RelativeUrlWithoutBase`] when the result has no
/// scheme, [`ParseError::InvalidHost`] for a web URL that has no host
/// to recover, and propagates errors from [`rebase`].
pub fn resolve(record: &UrlRecord, base: Option<&UrlRecord>) -> Result<UrlRecord, ParseError> {
    let mut result = match base {
        Some(base) => rebase(record, base)?,
        None => record.clone(),
    };

    let Some(scheme) = result.scheme.as_deref() else {
        return Err(ParseError::RelativeUrlWithoutBase);
    };

    match get_scheme_type(scheme).mode() {
        Mode::Web if result.host.as_deref().is_none_or(str::is_empty) => {
            let host = take_first_segment(&mut result).ok_or(ParseError::InvalidHost)?;
            result.host = Some(host);
        }
        Mode::File if result.host.is_none() => result.host = Some(String::new()),
        _ => {}
    }

    result.ensure_root();
    Ok(result)
}

/// Remove and return the first non-empty path segment, along with any
/// empty segments before it.
fn take_first_segment(record: &mut UrlRecord) -> Option<String> {
    if let Some(index) = record.dirs.iter().position(|dir| !dir.is_empty()) {
        let host = record.dirs.remove(index);
        record.dirs.drain(..index);
        return Some(host);
    }
    let file = record.file.take().filter(|file| !file.is_empty())?;
    record.dirs.clear();
    Some(file)
}
