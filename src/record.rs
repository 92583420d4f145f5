use crate::compat::{String, Vec};

/// A port component
///
/// `Empty` is the explicit "no port" marker of a URL such as `http://h:/`,
/// which is distinct from a URL without a port separator at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    /// A port separator without digits
    Empty,
    /// A port number
    Number(u16),
}

impl Port {
    /// The port number, if there is one
    pub fn number(self) -> Option<u16> {
        match self {
            Self::Empty => None,
            Self::Number(port) => Some(port),
        }
    }
}

impl core::fmt::Display for Port {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(port) => write!(f, "{port}"),
        }
    }
}

/// Structured URL representation shared with the syntax engine
///
/// A record is exclusively owned by one `UrlReference`; every copy is a
/// deep copy, `dirs` included. An empty `dirs` vector means "no dirs".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UrlRecord {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub host: Option<String>,
    pub port: Option<Port>,
    pub drive: Option<String>,
    pub root: bool,
    pub dirs: Vec<String>,
    pub file: Option<String>,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl UrlRecord {
    /// Whether the record carries dirs or a file
    pub fn has_path(&self) -> bool {
        !self.dirs.is_empty() || self.file.is_some()
    }

    /// Whether the path must start at the root: a host or drive followed
    /// by path content.
    pub fn requires_root(&self) -> bool {
        (self.host.is_some() || self.drive.is_some()) && self.has_path()
    }

    /// Add the path root when [`requires_root`](Self::requires_root) holds
    pub fn ensure_root(&mut self) {
        if self.requires_root() {
            self.root = true;
        }
    }

    /// Replace the path components with those of `path`
    pub fn set_path(&mut self, path: PathParts) {
        self.drive = path.drive;
        self.root = path.root;
        self.dirs = path.dirs;
        self.file = path.file;
    }

    /// Remove drive, root, dirs and file
    pub fn clear_path(&mut self) {
        self.set_path(PathParts::default());
    }

    /// Remove user, pass and port
    pub fn clear_credentials_and_port(&mut self) {
        self.user = None;
        self.pass = None;
        self.port = None;
    }
}

/// The path components of a record, as produced by path parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PathParts {
    pub drive: Option<String>,
    pub root: bool,
    pub dirs: Vec<String>,
    pub file: Option<String>,
}
