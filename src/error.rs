//! The single error kind surfaced by root resolution.

use std::fmt;
use std::path::{Path, PathBuf};

/// A root could not be validated or discovered.
///
/// `variable` names the environment variable (or other context, such as the
/// install location) that led to the failure. `attempted_path` is present when
/// a concrete directory was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    variable: String,
    attempted_path: Option<PathBuf>,
    message: String,
}

impl ConfigurationError {
    /// A configured variable pointed at a directory without the marker file.
    pub fn invalid_root(variable: &str, attempted: &Path) -> Self {
        Self {
            variable: variable.to_string(),
            attempted_path: Some(attempted.to_path_buf()),
            message: format!("Invalid {variable} directory [{}]", attempted.display()),
        }
    }

    /// None of the fallback probes located a root for `variable`.
    pub fn undetermined(variable: &str) -> Self {
        Self {
            variable: variable.to_string(),
            attempted_path: None,
            message: format!("Unable to determine the {variable} directory"),
        }
    }

    /// The running executable could not be located on disk.
    pub fn install_location(detail: impl fmt::Display) -> Self {
        Self {
            variable: "install location".to_string(),
            attempted_path: None,
            message: format!("Unable to determine install location: {detail}"),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn attempted_path(&self) -> Option<&Path> {
        self.attempted_path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_root_names_variable_and_path() {
        let err = ConfigurationError::invalid_root("SNIPER_ROOT", Path::new("/opt/missing"));
        assert_eq!(err.variable(), "SNIPER_ROOT");
        assert_eq!(err.attempted_path(), Some(Path::new("/opt/missing")));
        assert_eq!(err.to_string(), "Invalid SNIPER_ROOT directory [/opt/missing]");
    }

    #[test]
    fn undetermined_has_no_path() {
        let err = ConfigurationError::undetermined("SNIPER_ROOT");
        assert!(err.attempted_path().is_none());
        assert_eq!(err.message(), "Unable to determine the SNIPER_ROOT directory");
    }
}
