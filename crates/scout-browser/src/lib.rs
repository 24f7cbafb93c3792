// Browser discovery for automation harnesses: locate installed browser
// executables and report their major version before launching sessions.

mod browser;
mod channel;
mod chrome;
mod error;
mod install_root;
mod platform;
mod version;

pub use browser::Browser;
pub use channel::ReleaseChannel;
pub use chrome::Chrome;
pub use error::{Error, Result};
pub use install_root::default_install_root;
pub use platform::HostOs;
pub use version::{major_version_or_sentinel, parse_major_version, query_version_string};
