use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use std::process::Command;

lazy_static! {
    /// Dotted four-segment version, e.g. `48.0.1293.1`.
    static ref VERSION_PATTERN: Regex = Regex::new(r"(\d+)\.\d+\.\d+\.\d+").unwrap();
}

/// Extract the major version number from a raw version string.
///
/// `"Google Chrome 48.0.1293.1"` yields `Some(48)`; text without a dotted
/// four-segment version yields `None`.
pub fn parse_major_version(raw: &str) -> Option<u32> {
    VERSION_PATTERN
        .captures(raw)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// Collapse an optional raw version string into the `-1` sentinel convention.
///
/// A missing string is silent; a string that does not parse logs a warning.
/// Callers treat `-1` as "version unknown".
pub fn major_version_or_sentinel(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else {
        return -1;
    };

    match parse_major_version(raw) {
        Some(major) => i32::try_from(major).unwrap_or(-1),
        None => {
            tracing::warn!(raw, "unable to parse browser version number");
            -1
        }
    }
}

/// Run the executable with `--version` and capture its trimmed stdout.
///
/// Every failure mode (spawn error, non-zero exit, empty or non-UTF-8
/// output) collapses to `None`.
pub fn query_version_string(executable: &Path) -> Option<String> {
    let output = Command::new(executable).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
