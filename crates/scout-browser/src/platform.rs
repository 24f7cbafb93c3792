/// Host operating systems the locator distinguishes.
///
/// Windows has no system-wide lookup locations here and maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Linux,
    Other,
}

impl HostOs {
    /// Detect the operating system this process is running on.
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "macos" => HostOs::MacOs,
            "linux" => HostOs::Linux,
            _ => HostOs::Other,
        }
    }
}
