use crate::version::major_version_or_sentinel;
use std::path::PathBuf;

/// Capabilities every discoverable browser kind exposes to the harness.
///
/// Implemented per browser kind; shared behavior lives in free helpers
/// rather than a base type.
pub trait Browser {
    /// Human-readable name, including the release-channel suffix.
    fn display_name(&self) -> String;

    /// Resolved executable path, if one can be found on this host.
    fn executable_path(&self) -> Option<PathBuf>;

    /// Unparsed version text the executable reports, if obtainable.
    fn raw_version_string(&self) -> Option<String>;

    /// Major version number, or `-1` when unknown.
    fn major_version(&self) -> i32 {
        major_version_or_sentinel(self.raw_version_string().as_deref())
    }
}
