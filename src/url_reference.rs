use crate::checkers::{is_drive_letter_input, is_scheme};
use crate::compat::{Cow, String, ToString, format};
use crate::error::{Error, Result};
use crate::input::Input;
use crate::options::{DriveDetection, Options};
use crate::record::{Port, UrlRecord};
use crate::scheme::is_file_scheme;
use crate::syntax::{self, Mode, Style};

/// A mutable URL reference.
///
/// Wraps a private URL record and keeps it valid: a drive letter only
/// appears on `file` (or scheme-less) URLs, user, password and port only
/// appear together with a host, and a path under a host or drive always
/// starts at the root. Every setter either applies completely or fails
/// and leaves the reference untouched.
///
/// # Examples
///
/// ```
/// use urlref::UrlReference;
///
/// let mut url = UrlReference::parse("b/c", "http://h/a/").unwrap();
/// assert_eq!(url.pathname(), "/a/b/c");
///
/// url.set_query(Some("x=1")).unwrap();
/// assert_eq!(url.to_string(), "http://h/a/b/c?x=1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlReference {
    record: UrlRecord,
    options: Options,
}

impl UrlReference {
    /// Create a reference from a string, another reference, or nothing.
    ///
    /// Strings are parsed without assuming a scheme; a string that starts
    /// with a drive letter, such as `C:\foo`, becomes a `file` URL.
    ///
    /// # Errors
    ///
    /// Propagates parse errors from the syntax engine.
    pub fn new<'a>(input: impl Into<Input<'a>>) -> Result<Self> {
        let record = input.into().into_record(Mode::NoScheme)?;
        Ok(Self::from_record(record, Options::default()))
    }

    /// Create a reference relative to an optional base.
    ///
    /// The input is parsed in the mode of the base's scheme and then
    /// rebased on it. Without a base this is [`UrlReference::new`].
    ///
    /// # Errors
    ///
    /// Propagates parse and rebase errors from the syntax engine.
    pub fn parse<'a, 'b>(input: impl Into<Input<'a>>, base: impl Into<Input<'b>>) -> Result<Self> {
        let base = base.into();
        if base.is_absent() {
            return Self::new(input);
        }
        let base = base.into_record(Mode::NoScheme)?;
        let record = input
            .into()
            .into_record(syntax::mode_for(&base, Mode::NoScheme))?;
        let record = syntax::rebase(&record, &base)?;
        Ok(Self::from_record(record, Options::default()))
    }

    /// Replace the options of this reference
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// The options of this reference
    pub fn options(&self) -> Options {
        self.options
    }

    fn from_record(record: UrlRecord, options: Options) -> Self {
        Self { record, options }
    }

    /// A new reference with the same options
    fn derive(&self, record: UrlRecord) -> Self {
        Self::from_record(record, self.options)
    }

    pub(crate) fn record(&self) -> &UrlRecord {
        &self.record
    }

    // Derivations

    /// Rebase this reference on `base`.
    ///
    /// # Errors
    ///
    /// Propagates parse and rebase errors from the syntax engine.
    pub fn rebase<'a>(&self, base: impl Into<Input<'a>>) -> Result<Self> {
        let base = base.into().into_record(Mode::NoScheme)?;
        let record = syntax::rebase(&self.record, &base)?;
        log::trace!("rebased <{self}> to <{}>", syntax::print(&record, Style::Url));
        Ok(self.derive(record))
    }

    /// Resolve this reference against an optional base and normalize the
    /// result.
    ///
    /// # Errors
    ///
    /// Fails when the result has no scheme, or a web URL has no host.
    pub fn resolve<'a>(&self, base: impl Into<Input<'a>>) -> Result<Self> {
        let base = base.into();
        let record = if base.is_absent() {
            syntax::resolve(&self.record, None)?
        } else {
            let base = base.into_record(Mode::NoScheme)?;
            syntax::resolve(&self.record, Some(&base))?
        };
        let record = syntax::normalize(&record);
        log::trace!("resolved <{self}> to <{}>", syntax::print(&record, Style::Url));
        Ok(self.derive(record))
    }

    /// A normalized copy of this reference
    pub fn normalize(&self) -> Self {
        self.derive(syntax::normalize(&self.record))
    }

    /// Alias of [`normalize`](Self::normalize)
    pub fn normalise(&self) -> Self {
        self.normalize()
    }

    // Serialization

    /// The WHATWG serialization, used for JSON
    pub fn to_json(&self) -> String {
        syntax::print(&self.record, Style::Whatwg)
    }

    /// The WHATWG serialization
    pub fn href(&self) -> String {
        syntax::print(&self.record, Style::Whatwg)
    }

    // Getters

    /// Whether the reference has a scheme
    pub fn is_absolute(&self) -> bool {
        self.record.scheme.is_some()
    }

    /// Whether the reference has a host (possibly empty)
    pub fn has_host(&self) -> bool {
        self.record.host.is_some()
    }

    pub fn scheme(&self) -> Option<&str> {
        self.record.scheme.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.record.user.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.record.pass.as_deref()
    }

    /// The host as printed by the syntax engine (IPv6 in brackets)
    pub fn hostname(&self) -> Option<Cow<'_, str>> {
        self.record.host.as_deref().map(syntax::print_host)
    }

    pub fn port(&self) -> Option<Port> {
        self.record.port
    }

    // driveletter, pathroot and filename follow the naming of
    // pathname and hostname.

    pub fn driveletter(&self) -> Option<&str> {
        self.record.drive.as_deref()
    }

    pub fn pathroot(&self) -> Option<&'static str> {
        self.record.root.then_some("/")
    }

    /// The directory segments of the path, without separators
    pub fn dirs(&self) -> &[String] {
        &self.record.dirs
    }

    pub fn filename(&self) -> Option<&str> {
        self.record.file.as_deref()
    }

    /// Drive, root, dirs and filename; empty when there is no path
    pub fn pathname(&self) -> String {
        syntax::pathname(&self.record)
    }

    pub fn query(&self) -> Option<&str> {
        self.record.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.record.hash.as_deref()
    }

    // Legacy URL API getters

    /// The scheme followed by `:`
    pub fn protocol(&self) -> Option<String> {
        self.record.scheme.as_ref().map(|scheme| format!("{scheme}:"))
    }

    /// The query preceded by `?`
    pub fn search(&self) -> Option<String> {
        self.record.query.as_ref().map(|query| format!("?{query}"))
    }

    /// The fragment preceded by `#`
    pub fn hash(&self) -> Option<String> {
        self.record.hash.as_ref().map(|hash| format!("#{hash}"))
    }

    // Setters

    /// Set or remove the scheme.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] when the URL has a drive letter, unless
    /// both the current and the new scheme are `file`.
    /// [`Error::InvalidArgument`] when the value is not a valid scheme.
    pub fn set_scheme(&mut self, value: Option<&str>) -> Result<()> {
        if self.record.drive.is_some()
            && (!is_file_scheme(value) || !is_file_scheme(self.record.scheme.as_deref()))
        {
            return Err(invalid_operation(format!(
                "cannot change the scheme of <{self}> because it has a drive-letter"
            )));
        }

        let Some(value) = value else {
            self.record.scheme = None;
            return Ok(());
        };
        if !is_scheme(value) {
            return Err(invalid_argument(format!(
                "cannot change the scheme of <{self}> using an invalid scheme-string"
            )));
        }
        self.record.scheme = Some(value.to_string());
        Ok(())
    }

    /// Set or remove the username. The password is always removed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] when setting a username on a URL
    /// without a host.
    pub fn set_username(&mut self, value: Option<&str>) -> Result<()> {
        if value.is_some() && self.record.host.is_none() {
            return Err(invalid_operation(format!(
                "cannot set a username on <{self}> because it does not have a hostname"
            )));
        }
        self.record.user = value.map(ToString::to_string);
        self.record.pass = None;
        Ok(())
    }

    /// Set or remove the password.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] when setting a password on a URL
    /// without a host or without a username.
    pub fn set_password(&mut self, value: Option<&str>) -> Result<()> {
        let Some(value) = value else {
            self.record.pass = None;
            return Ok(());
        };
        if self.record.host.is_none() {
            return Err(invalid_operation(format!(
                "cannot set a password on <{self}> because it does not have a hostname"
            )));
        }
        if self.record.user.is_none() {
            return Err(invalid_operation(format!(
                "cannot set a password on <{self}> because it does not have a username"
            )));
        }
        self.record.pass = Some(value.to_string());
        Ok(())
    }

    /// Set or remove the host.
    ///
    /// Username, password and port are always removed. A path under the
    /// new host is made absolute.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` keeps the setters uniform.
    pub fn set_hostname(&mut self, value: Option<&str>) -> Result<()> {
        let record = &mut self.record;
        record.clear_credentials_and_port();
        record.host = value.map(ToString::to_string);
        record.ensure_root();
        Ok(())
    }

    /// Set or remove the port.
    ///
    /// The empty string stores the explicit empty port; numbers are
    /// floored; strings must consist of digits.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] when the URL has no host.
    /// [`Error::InvalidArgument`] for negative, too large or non-numeric
    /// values.
    pub fn set_port<'a, P: Into<PortValue<'a>>>(&mut self, value: Option<P>) -> Result<()> {
        let Some(value) = value else {
            self.record.port = None;
            return Ok(());
        };
        if self.record.host.is_none() {
            return Err(invalid_operation(format!(
                "cannot set a port on <{self}> because it does not have a hostname"
            )));
        }

        let port = match value.into() {
            PortValue::Text(text) if text.is_empty() => Port::Empty,
            PortValue::Text(text) => {
                if !text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid_argument(format!(
                        "cannot set the port on <{self}> using a string that contains non-digit characters"
                    )));
                }
                let number = text.parse::<u32>().ok();
                self.port_number(number.map(i64::from))?
            }
            PortValue::Integer(number) => self.port_number(Some(number))?,
            PortValue::Float(number) => {
                // Truncation floors non-negative numbers; NaN is out of range
                let in_range = (0.0..65536.0).contains(&number);
                self.port_number(in_range.then_some(number as i64))?
            }
        };
        self.record.port = Some(port);
        Ok(())
    }

    fn port_number(&self, number: Option<i64>) -> Result<Port> {
        match number.map(u16::try_from) {
            Some(Ok(port)) => Ok(Port::Number(port)),
            _ => Err(invalid_argument(format!(
                "cannot set the port on <{self}> to a value outside 0 to 2**16 - 1"
            ))),
        }
    }

    /// Set or remove the drive letter.
    ///
    /// A single letter is stored as `letter:`. A URL without a scheme
    /// becomes a `file` URL, and a path under the drive is made absolute.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] when the URL has a scheme other than
    /// `file`. [`Error::InvalidArgument`] when the value is not a letter
    /// optionally followed by `:` or `|`.
    pub fn set_driveletter(&mut self, value: Option<&str>) -> Result<()> {
        let Some(value) = value else {
            self.record.drive = None;
            return Ok(());
        };
        if self.record.scheme.is_some() && !is_file_scheme(self.record.scheme.as_deref()) {
            return Err(invalid_operation(format!(
                "cannot set a drive-letter on <{self}> because it does not have a file-scheme"
            )));
        }
        if !is_drive_letter_input(value) {
            return Err(invalid_argument(format!(
                "cannot set the drive-letter on <{self}> using a string that is not a drive-letter"
            )));
        }

        let record = &mut self.record;
        if record.scheme.is_none() {
            record.scheme = Some(String::from("file"));
        }
        record.drive = Some(if value.len() == 1 {
            format!("{value}:")
        } else {
            value.to_string()
        });
        record.ensure_root();
        Ok(())
    }

    /// Add or remove the path root.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] when removing the root from a path that
    /// follows a host or drive letter.
    pub fn set_pathroot(&mut self, value: bool) -> Result<()> {
        if !value && self.record.requires_root() {
            return Err(invalid_operation(format!(
                "cannot remove the path-root from <{self}>"
            )));
        }
        self.record.root = value;
        Ok(())
    }

    /// Set or remove the filename. A filename under a host or drive makes
    /// the path absolute.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for the empty string.
    pub fn set_filename(&mut self, value: Option<&str>) -> Result<()> {
        let Some(value) = value else {
            self.record.file = None;
            return Ok(());
        };
        if value.is_empty() {
            return Err(invalid_argument(format!(
                "cannot set the filename of <{self}> to the empty string"
            )));
        }
        self.record.file = Some(value.to_string());
        self.record.ensure_root();
        Ok(())
    }

    /// Replace the drive, root, dirs and filename with those parsed from
    /// `value`. `None` and the empty string remove the path.
    ///
    /// Drive letters are handled according to
    /// [`Options::pathname_drive`].
    ///
    /// # Errors
    ///
    /// Never fails with the bundled syntax engine; the `Result` keeps the
    /// setters uniform.
    pub fn set_pathname(&mut self, value: Option<&str>) -> Result<()> {
        let record = &mut self.record;
        let Some(value) = value.filter(|value| !value.is_empty()) else {
            record.clear_path();
            return Ok(());
        };

        let policy = self.options.pathname_drive;
        let fallback = match policy {
            DriveDetection::Ignore => Mode::Generic,
            DriveDetection::Detect | DriveDetection::DetectAndAssumeFile => Mode::File,
        };
        let path = syntax::parse_path(value, syntax::mode_for(record, fallback));
        record.set_path(path);

        if policy == DriveDetection::DetectAndAssumeFile
            && record.drive.is_some()
            && record.scheme.is_none()
        {
            record.scheme = Some(String::from("file"));
        }
        record.ensure_root();
        Ok(())
    }

    /// Set or remove the query (without the leading `?`)
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` keeps the setters uniform.
    pub fn set_query(&mut self, value: Option<&str>) -> Result<()> {
        self.record.query = value.map(ToString::to_string);
        Ok(())
    }

    /// Set or remove the fragment (without the leading `#`)
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` keeps the setters uniform.
    pub fn set_fragment(&mut self, value: Option<&str>) -> Result<()> {
        self.record.hash = value.map(ToString::to_string);
        Ok(())
    }

    // Legacy URL API setters. They strip the separator and go through
    // the setters above.

    /// Set the scheme from a protocol such as `http:`
    ///
    /// # Errors
    ///
    /// See [`set_scheme`](Self::set_scheme).
    pub fn set_protocol(&mut self, value: Option<&str>) -> Result<()> {
        self.set_scheme(value.map(|value| value.strip_suffix(':').unwrap_or(value)))
    }

    /// Set the query from a search string such as `?a=b`
    ///
    /// # Errors
    ///
    /// See [`set_query`](Self::set_query).
    pub fn set_search(&mut self, value: Option<&str>) -> Result<()> {
        self.set_query(value.map(|value| value.strip_prefix('?').unwrap_or(value)))
    }

    /// Set the fragment from a hash such as `#top`
    ///
    /// # Errors
    ///
    /// See [`set_fragment`](Self::set_fragment).
    pub fn set_hash(&mut self, value: Option<&str>) -> Result<()> {
        self.set_fragment(value.map(|value| value.strip_prefix('#').unwrap_or(value)))
    }
}

fn invalid_operation(message: String) -> Error {
    log::debug!("rejected mutation: {message}");
    Error::InvalidOperation(message)
}

fn invalid_argument(message: String) -> Error {
    log::debug!("rejected value: {message}");
    Error::InvalidArgument(message)
}

/// A value accepted by [`UrlReference::set_port`]
#[derive(Debug, Clone, PartialEq)]
pub enum PortValue<'a> {
    /// An integer; must lie in `0..=65535`
    Integer(i64),
    /// A number; floored, then must lie in `0..=65535`
    Float(f64),
    /// The empty string, or a string of ASCII digits
    Text(Cow<'a, str>),
}

impl From<u16> for PortValue<'_> {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for PortValue<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i32> for PortValue<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for PortValue<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PortValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a str> for PortValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for PortValue<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl core::fmt::Display for UrlReference {
    /// The URL-style serialization
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&syntax::print(&self.record, Style::Url))
    }
}

impl core::str::FromStr for UrlReference {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::new(input)
    }
}

impl TryFrom<&str> for UrlReference {
    type Error = Error;

    fn try_from(input: &str) -> Result<Self> {
        Self::new(input)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlReference {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_json())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrlReference {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let input = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(input).map_err(serde::de::Error::custom)
    }
}
