use crate::{Error, Result};
use std::path::PathBuf;

/// Default directory where the toolkit places browsers it manages itself.
///
/// Checked before any system-wide installation during path resolution.
pub fn default_install_root() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDirectory)?;
    Ok(home.join(".scout").join("browsers"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_lives_under_home() {
        let root = default_install_root().unwrap();
        assert!(root.ends_with(".scout/browsers"));
    }
}
