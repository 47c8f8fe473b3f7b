//! Error types for the launcher crates
//!
//! Centralized error handling using thiserror. A delegated child exiting
//! non-zero is never an error; these cover everything that prevents the
//! launcher from delegating at all.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// All error types a launcher can hit before (or while) delegating
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Home directory could not be determined
    #[error("could not determine the user home directory")]
    HomeNotFound,

    /// Bootstrap or install subprocess exited non-zero
    #[error("{what} failed with exit code {code}")]
    InstallFailed { what: String, code: i32 },

    /// A child process could not be spawned at all
    #[error("failed to launch {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_spawn_error_names_the_program() {
        let err = LauncherError::Spawn {
            program: Path::new("/opt/tools/repo").to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/opt/tools/repo"));
    }

    #[test]
    fn test_install_failed_carries_exit_code() {
        let err = LauncherError::InstallFailed {
            what: "uv installer".to_string(),
            code: 2,
        };
        assert!(err.to_string().contains("exit code 2"));
    }
}
