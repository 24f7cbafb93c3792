use anyhow::{Result, anyhow};
use scout_browser::{
    Browser, Chrome, HostOs, ReleaseChannel, major_version_or_sentinel, query_version_string,
};
use std::path::PathBuf;

pub fn execute(channel: ReleaseChannel, install_root: Option<PathBuf>) -> Result<()> {
    let chrome = Chrome::new(channel);
    let root = super::install_root_or_default(install_root);

    let path = chrome
        .resolve_executable(root.as_deref(), HostOs::detect())
        .ok_or_else(|| anyhow!("{} not found on this host", chrome.display_name()))?;

    let raw = query_version_string(&path);
    let major = major_version_or_sentinel(raw.as_deref());

    if major < 0 {
        return Err(anyhow!(
            "version of {} is unknown",
            chrome.display_name()
        ));
    }

    println!("{major}");
    Ok(())
}
