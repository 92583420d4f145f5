use crate::compat::String;

/// Errors raised by the URL syntax engine while parsing or resolving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Invalid scheme format
    InvalidScheme,
    /// Invalid or missing host
    InvalidHost,
    /// Invalid port number
    InvalidPort,
    /// Relative URL resolved without a base that supplies a scheme
    RelativeUrlWithoutBase,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::RelativeUrlWithoutBase => "Relative URL without base",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Errors returned by [`UrlReference`](crate::UrlReference) operations
///
/// The messages of the two mutator errors embed the serialized URL
/// the operation was attempted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The mutation is not allowed given the other components of the URL
    InvalidOperation(String),
    /// The supplied value is not syntactically valid for the component
    InvalidArgument(String),
    /// Parsing or resolution failed in the syntax engine
    Parse(ParseError),
}

impl Error {
    /// Whether this is an [`Error::InvalidOperation`]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }

    /// Whether this is an [`Error::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidOperation(msg) | Self::InvalidArgument(msg) => {
                write!(f, "URLReference: {msg}")
            }
            Self::Parse(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for URL reference operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::{String, ToString};

    #[test]
    fn test_display_prefixes_mutator_errors() {
        let err = Error::InvalidArgument(String::from("bad port"));
        assert_eq!(err.to_string(), "URLReference: bad port");
        assert!(err.is_invalid_argument());
        assert!(!err.is_invalid_operation());
    }

    #[test]
    fn test_parse_error_passes_through() {
        let err: Error = ParseError::InvalidPort.into();
        assert_eq!(err, Error::Parse(ParseError::InvalidPort));
        assert_eq!(err.to_string(), "Invalid port");
    }
}
