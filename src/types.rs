/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    #[default]
    NotSpecial,
}

impl SchemeType {
    /// Check if this is a special scheme
    pub fn is_special(self) -> bool {
        self != Self::NotSpecial
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::NotSpecial => None,
        }
    }

    /// Parsing mode used for URLs with this scheme
    pub fn mode(self) -> Mode {
        match self {
            Self::File => Mode::File,
            Self::NotSpecial => Mode::Generic,
            Self::Http | Self::Https | Self::Ws | Self::Wss | Self::Ftp => Mode::Web,
        }
    }
}

/// Parsing modes of the syntax engine
///
/// The mode decides which characters separate path segments and whether
/// a Windows drive letter is recognised at the start of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Any non-special scheme: `/` is the only separator
    Generic,
    /// http, https, ws, wss and ftp
    Web,
    /// The file scheme (file-path conventions)
    File,
    /// Nothing is known about the scheme yet
    #[default]
    NoScheme,
}

impl Mode {
    /// Whether `\` separates path segments like `/` does
    pub fn backslash_is_separator(self) -> bool {
        self != Self::Generic
    }

    /// Whether a leading drive letter is recognised
    pub fn detects_drive(self) -> bool {
        matches!(self, Self::File | Self::NoScheme)
    }
}
