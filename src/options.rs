/// How the pathname setter treats a leading drive letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriveDetection {
    /// Parse the pathname in the URL's mode, falling back to file-path
    /// conventions when there is no scheme. A drive is recognised but the
    /// scheme is left alone.
    #[default]
    Detect,
    /// As [`Detect`](Self::Detect), and a URL without a scheme gets the
    /// `file` scheme when its new pathname carries a drive.
    DetectAndAssumeFile,
    /// URLs without a scheme parse the pathname with generic conventions,
    /// so `C:` is an ordinary segment.
    Ignore,
}

/// Per-reference policy, inherited by every reference derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Drive-letter handling of [`UrlReference::set_pathname`](crate::UrlReference::set_pathname)
    pub pathname_drive: DriveDetection,
}

impl Options {
    /// Options with the given drive-letter policy for the pathname setter
    pub fn with_pathname_drive(mut self, policy: DriveDetection) -> Self {
        self.pathname_drive = policy;
        self
    }
}
