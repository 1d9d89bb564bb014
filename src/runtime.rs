//! Filesystem helpers shared by the resolver and the CLI.
//!
//! Centralizes install-anchor detection, the marker-file check, and ancestor
//! walking so every caller agrees on what counts as a root.

use crate::ConfigurationError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File whose presence marks a directory as a simulator or benchmarks root.
pub const MARKER_FILE: &str = "run-sniper";

/// Number of directory levels between the install anchor and the local
/// benchmarks root (`<root>/target/<profile>/<exe>`).
pub const ANCHOR_DEPTH: usize = 3;

/// Returns true when `candidate` contains the marker as a regular file.
pub fn is_root(candidate: &Path) -> bool {
    candidate.join(MARKER_FILE).is_file()
}

pub fn canonicalize_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Canonical path of the running executable.
pub fn install_anchor() -> Result<PathBuf, ConfigurationError> {
    let exe = env::current_exe().map_err(ConfigurationError::install_location)?;
    Ok(canonicalize_path(&exe))
}

/// Strip `levels` trailing components, stopping at the filesystem root.
pub fn ancestor_dir(path: &Path, levels: usize) -> PathBuf {
    let mut dir = path.to_path_buf();
    for _ in 0..levels {
        if !dir.pop() {
            break;
        }
    }
    dir
}

/// Directory `ANCHOR_DEPTH` levels above the canonical `anchor`.
pub fn local_root_for(anchor: &Path) -> PathBuf {
    canonicalize_path(&ancestor_dir(&canonicalize_path(anchor), ANCHOR_DEPTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn ancestor_dir_strips_levels() {
        let path = Path::new("/srv/bench/tools/python/env-setup");
        assert_eq!(ancestor_dir(path, 3), PathBuf::from("/srv/bench"));
    }

    #[test]
    fn ancestor_dir_saturates_at_root() {
        assert_eq!(ancestor_dir(Path::new("/a"), 3), PathBuf::from("/"));
    }

    #[test]
    fn marker_must_be_regular_file() {
        let tmp = TempDir::new().unwrap();
        assert!(!is_root(tmp.path()));

        fs::create_dir(tmp.path().join(MARKER_FILE)).unwrap();
        assert!(!is_root(tmp.path()), "directory named like the marker is not a root");

        let other = TempDir::new().unwrap();
        File::create(other.path().join(MARKER_FILE)).unwrap();
        assert!(is_root(other.path()));
    }
}
