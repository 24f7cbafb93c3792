pub mod list;
pub mod path;
pub mod version;

use std::path::PathBuf;

/// Managed install root for a command: the explicit override when given,
/// otherwise the toolkit default. `None` when neither is available.
pub fn install_root_or_default(install_root: Option<PathBuf>) -> Option<PathBuf> {
    install_root.or_else(|| scout_browser::default_install_root().ok())
}
