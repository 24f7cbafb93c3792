use anyhow::{Result, anyhow};
use scout_browser::{Browser, Chrome, HostOs, ReleaseChannel};
use std::path::PathBuf;

pub fn execute(channel: ReleaseChannel, install_root: Option<PathBuf>) -> Result<()> {
    let chrome = Chrome::new(channel);
    let root = super::install_root_or_default(install_root);

    let path = chrome
        .resolve_executable(root.as_deref(), HostOs::detect())
        .ok_or_else(|| anyhow!("{} not found on this host", chrome.display_name()))?;

    println!("{}", path.display());
    Ok(())
}
