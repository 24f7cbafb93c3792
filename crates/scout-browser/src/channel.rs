use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Release channels a browser can be installed from.
///
/// Each channel installs to a distinct path and is versioned independently,
/// so every path derivation in this crate branches on the same enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseChannel {
    Stable,
    Beta,
    /// Dev / Canary builds.
    Unstable,
}

impl ReleaseChannel {
    pub const ALL: [ReleaseChannel; 3] = [
        ReleaseChannel::Stable,
        ReleaseChannel::Beta,
        ReleaseChannel::Unstable,
    ];

    /// Suffix appended to a browser's base name for display.
    pub fn display_suffix(&self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "Stable",
            ReleaseChannel::Beta => "Beta",
            ReleaseChannel::Unstable => "Dev / Canary",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "stable",
            ReleaseChannel::Beta => "beta",
            ReleaseChannel::Unstable => "unstable",
        }
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(ReleaseChannel::Stable),
            "beta" => Ok(ReleaseChannel::Beta),
            "unstable" => Ok(ReleaseChannel::Unstable),
            other => Err(Error::UnknownChannel(other.to_string())),
        }
    }
}
