use crate::browser::Browser;
use crate::channel::ReleaseChannel;
use crate::install_root::default_install_root;
use crate::platform::HostOs;
use crate::version::query_version_string;
use std::fs;
use std::path::{Path, PathBuf};

/// Locates a Google Chrome executable for a single release channel.
///
/// Every query recomputes from scratch; nothing is cached between calls, so
/// two descriptors for different channels never interact.
pub struct Chrome {
    channel: ReleaseChannel,
}

impl Chrome {
    /// Create a descriptor for one channel. No filesystem or process access
    /// happens until a path or version is requested.
    pub fn new(channel: ReleaseChannel) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> ReleaseChannel {
        self.channel
    }

    /// Relative path under `<root>/chrome/<channel>/opt/google/` where a
    /// managed install places the binary.
    fn install_subpath(&self) -> &'static str {
        match self.channel {
            ReleaseChannel::Stable => "chrome/google-chrome",
            ReleaseChannel::Beta => "chrome-beta/google-chrome-beta",
            ReleaseChannel::Unstable => "chrome-unstable/google-chrome-unstable",
        }
    }

    /// Binary name looked up on the search path for Linux hosts.
    fn search_path_binary(&self) -> &'static str {
        match self.channel {
            ReleaseChannel::Stable => "google-chrome",
            ReleaseChannel::Beta => "google-chrome-beta",
            ReleaseChannel::Unstable => "google-chrome-unstable",
        }
    }

    /// Fixed application-bundle executable for macOS hosts.
    fn macos_bundle_path(&self) -> PathBuf {
        let app = match self.channel {
            ReleaseChannel::Stable => "Google Chrome",
            ReleaseChannel::Beta => "Google Chrome Beta",
            ReleaseChannel::Unstable => "Google Chrome Canary",
        };

        PathBuf::from("/Applications")
            .join(format!("{app}.app"))
            .join("Contents/MacOS")
            .join(app)
    }

    /// Check the managed install root for this channel's binary.
    ///
    /// The stat is symlink-aware and does not dereference: a symlinked entry
    /// counts as present even when its target is gone. Stat failures of any
    /// kind yield `None`.
    pub fn locate_in_install_root(&self, root: &Path) -> Option<PathBuf> {
        let expected = root
            .join("chrome")
            .join(self.channel.as_str())
            .join("opt/google")
            .join(self.install_subpath());

        fs::symlink_metadata(&expected).ok().map(|_| expected)
    }

    /// Resolve the executable, preferring the managed install root over
    /// system-wide locations.
    ///
    /// On macOS the well-known bundle path is reported without a filesystem
    /// check; on Linux the channel binary is looked up on `PATH`. Unsupported
    /// hosts resolve to `None` without touching the search path.
    pub fn resolve_executable(&self, install_root: Option<&Path>, os: HostOs) -> Option<PathBuf> {
        if let Some(root) = install_root {
            if let Some(path) = self.locate_in_install_root(root) {
                tracing::debug!(path = %path.display(), "found managed install");
                return Some(path);
            }
        }

        match os {
            HostOs::MacOs => Some(self.macos_bundle_path()),
            HostOs::Linux => which::which(self.search_path_binary()).ok(),
            HostOs::Other => None,
        }
    }
}

impl Browser for Chrome {
    fn display_name(&self) -> String {
        format!("Google Chrome {}", self.channel.display_suffix())
    }

    fn executable_path(&self) -> Option<PathBuf> {
        // An unresolvable home directory just means no managed root to check.
        let root = default_install_root().ok();
        self.resolve_executable(root.as_deref(), HostOs::detect())
    }

    fn raw_version_string(&self) -> Option<String> {
        let path = self.executable_path()?;
        query_version_string(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn managed_binary(root: &Path, channel: ReleaseChannel, subpath: &str) -> PathBuf {
        let path = root
            .join("chrome")
            .join(channel.as_str())
            .join("opt/google")
            .join(subpath);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_display_names_per_channel() {
        assert_eq!(
            Chrome::new(ReleaseChannel::Stable).display_name(),
            "Google Chrome Stable"
        );
        assert_eq!(
            Chrome::new(ReleaseChannel::Beta).display_name(),
            "Google Chrome Beta"
        );
        assert_eq!(
            Chrome::new(ReleaseChannel::Unstable).display_name(),
            "Google Chrome Dev / Canary"
        );
    }

    #[test]
    fn test_locate_in_install_root_finds_managed_binary() {
        let root = tempfile::tempdir().unwrap();
        let expected = managed_binary(
            root.path(),
            ReleaseChannel::Beta,
            "chrome-beta/google-chrome-beta",
        );

        let chrome = Chrome::new(ReleaseChannel::Beta);
        assert_eq!(chrome.locate_in_install_root(root.path()), Some(expected));
    }

    #[test]
    fn test_locate_in_install_root_empty_root() {
        let root = tempfile::tempdir().unwrap();
        let chrome = Chrome::new(ReleaseChannel::Stable);
        assert_eq!(chrome.locate_in_install_root(root.path()), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_in_install_root_accepts_dangling_symlink() {
        let root = tempfile::tempdir().unwrap();
        let entry = root
            .path()
            .join("chrome/stable/opt/google/chrome/google-chrome");
        fs::create_dir_all(entry.parent().unwrap()).unwrap();
        std::os::unix::fs::symlink("/nonexistent/target", &entry).unwrap();

        let chrome = Chrome::new(ReleaseChannel::Stable);
        assert_eq!(chrome.locate_in_install_root(root.path()), Some(entry));
    }

    #[test]
    fn test_managed_root_wins_over_system_locations() {
        let root = tempfile::tempdir().unwrap();
        let expected = managed_binary(
            root.path(),
            ReleaseChannel::Stable,
            "chrome/google-chrome",
        );

        // macOS would otherwise report the fixed bundle path unconditionally.
        let chrome = Chrome::new(ReleaseChannel::Stable);
        assert_eq!(
            chrome.resolve_executable(Some(root.path()), HostOs::MacOs),
            Some(expected)
        );
    }

    #[test]
    fn test_macos_bundle_paths() {
        let chrome = Chrome::new(ReleaseChannel::Unstable);
        assert_eq!(
            chrome.resolve_executable(None, HostOs::MacOs),
            Some(PathBuf::from(
                "/Applications/Google Chrome Canary.app/Contents/MacOS/Google Chrome Canary"
            ))
        );
    }

    #[test]
    fn test_linux_falls_back_to_search_path() {
        let root = tempfile::tempdir().unwrap();
        let chrome = Chrome::new(ReleaseChannel::Beta);

        // Agrees with whatever the host's PATH says, including absence.
        assert_eq!(
            chrome.resolve_executable(Some(root.path()), HostOs::Linux),
            which::which("google-chrome-beta").ok()
        );
    }

    #[test]
    fn test_unsupported_host_resolves_to_none() {
        let root = tempfile::tempdir().unwrap();
        for channel in ReleaseChannel::ALL {
            let chrome = Chrome::new(channel);
            assert_eq!(
                chrome.resolve_executable(Some(root.path()), HostOs::Other),
                None
            );
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        managed_binary(root.path(), ReleaseChannel::Beta, "chrome-beta/google-chrome-beta");

        let chrome = Chrome::new(ReleaseChannel::Beta);
        let first = chrome.resolve_executable(Some(root.path()), HostOs::Linux);
        let second = chrome.resolve_executable(Some(root.path()), HostOs::Linux);
        assert_eq!(first, second);
    }
}
