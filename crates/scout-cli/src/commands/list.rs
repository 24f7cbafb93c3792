use anyhow::Result;
use scout_browser::{
    Browser, Chrome, HostOs, ReleaseChannel, major_version_or_sentinel, query_version_string,
};
use std::path::PathBuf;

pub fn execute(install_root: Option<PathBuf>) -> Result<()> {
    let os = HostOs::detect();
    let root = super::install_root_or_default(install_root);

    for channel in ReleaseChannel::ALL {
        let chrome = Chrome::new(channel);

        match chrome.resolve_executable(root.as_deref(), os) {
            Some(path) => {
                let raw = query_version_string(&path);
                let major = major_version_or_sentinel(raw.as_deref());

                if major >= 0 {
                    println!(
                        "✅ {}: {} (major version {})",
                        chrome.display_name(),
                        path.display(),
                        major
                    );
                } else {
                    println!(
                        "✅ {}: {} (version unknown)",
                        chrome.display_name(),
                        path.display()
                    );
                }
            }
            None => println!("❌ {}: not found", chrome.display_name()),
        }
    }

    Ok(())
}
