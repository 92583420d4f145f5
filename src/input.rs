use crate::compat::{Cow, String};
use crate::error::Result;
use crate::record::UrlRecord;
use crate::syntax::{self, Mode};
use crate::url_reference::UrlReference;

/// A value accepted where a URL is expected
///
/// Strings are parsed, references are copied and `Absent` stands for no
/// URL at all (the empty record).
#[derive(Debug, Clone)]
pub enum Input<'a> {
    /// No value
    Absent,
    /// An existing reference; its record is deep-copied
    Reference(&'a UrlReference),
    /// A string to parse
    Text(Cow<'a, str>),
}

impl Input<'_> {
    /// Whether this is [`Input::Absent`]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Convert to a record, parsing strings in the given mode
    pub(crate) fn into_record(self, mode: Mode) -> Result<UrlRecord> {
        match self {
            Self::Absent => Ok(UrlRecord::default()),
            Self::Reference(reference) => Ok(reference.record().clone()),
            Self::Text(text) => parse_record(&text, mode),
        }
    }
}

/// Parse a string into a record. A drive letter without a scheme makes
/// the string a file URL.
pub(crate) fn parse_record(input: &str, mode: Mode) -> Result<UrlRecord> {
    let mut record = syntax::parse(input, mode)?;
    if record.drive.is_some() && record.scheme.is_none() {
        record.scheme = Some(String::from("file"));
    }
    Ok(record)
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Input<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Input<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a UrlReference> for Input<'a> {
    fn from(value: &'a UrlReference) -> Self {
        Self::Reference(value)
    }
}

impl<'a, T: Into<Input<'a>>> From<Option<T>> for Input<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
