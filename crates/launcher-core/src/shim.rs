//! Shim path resolution and staleness planning for uv-managed tools

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::error::{LauncherError, Result};

/// Installed tools older than this are removed and reinstalled
pub const STALE_AFTER: Duration = Duration::from_secs(48 * 60 * 60);

#[cfg(windows)]
const EXE_SUFFIX: &str = ".exe";
#[cfg(not(windows))]
const EXE_SUFFIX: &str = "";

/// Resolved filesystem locations for a shimmed tool
#[derive(Debug, Clone)]
pub struct ShimPaths {
    /// Directory uv shims are redirected into
    pub shim_dir: PathBuf,
    /// Expected location of the installed tool binary
    pub tool_path: PathBuf,
    /// Expected location of the uv binary itself
    pub uv_path: PathBuf,
}

impl ShimPaths {
    /// Resolve paths under the current user's home directory
    pub fn resolve(tool: &str) -> Result<Self> {
        let home = dirs::home_dir().ok_or(LauncherError::HomeNotFound)?;
        Ok(Self::for_home(&home, tool))
    }

    /// Resolve paths under an explicit home directory
    pub fn for_home(home: &Path, tool: &str) -> Self {
        let shim_dir = home.join(".local").join("shims");
        let tool_path = shim_dir.join(format!("{tool}{EXE_SUFFIX}"));
        let uv_path = home
            .join(".local")
            .join("bin")
            .join(format!("uv{EXE_SUFFIX}"));
        Self {
            shim_dir,
            tool_path,
            uv_path,
        }
    }
}

/// What the launcher has to do before it can delegate to the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShimAction {
    /// Tool is present and fresh; run it directly
    Run,
    /// Tool is missing; install it (bootstrapping uv first if needed)
    Install,
    /// Tool is present but stale; remove it and reinstall
    Refresh,
}

/// Decide what to do for the tool binary at `tool_path`
pub fn plan(tool_path: &Path, now: SystemTime) -> Result<ShimAction> {
    match std::fs::metadata(tool_path) {
        Ok(meta) => Ok(classify(meta.modified()?, now)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ShimAction::Install),
        Err(err) => Err(err.into()),
    }
}

/// Classify an existing tool binary by its modification time
pub fn classify(modified: SystemTime, now: SystemTime) -> ShimAction {
    match now.duration_since(modified) {
        Ok(age) if age > STALE_AFTER => ShimAction::Refresh,
        // A modification time in the future counts as fresh
        _ => ShimAction::Run,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted_in_home() {
        let paths = ShimPaths::for_home(Path::new("/home/build"), "repo");
        assert_eq!(paths.shim_dir, Path::new("/home/build/.local/shims"));
        assert!(paths.tool_path.starts_with(&paths.shim_dir));
        assert!(paths.uv_path.starts_with("/home/build/.local/bin"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_file_names_on_unix() {
        let paths = ShimPaths::for_home(Path::new("/home/build"), "repo");
        assert_eq!(paths.tool_path.file_name().unwrap(), "repo");
        assert_eq!(paths.uv_path.file_name().unwrap(), "uv");
    }

    #[cfg(windows)]
    #[test]
    fn test_file_names_on_windows() {
        let paths = ShimPaths::for_home(Path::new("C:\\Users\\build"), "repo");
        assert_eq!(paths.tool_path.file_name().unwrap(), "repo.exe");
        assert_eq!(paths.uv_path.file_name().unwrap(), "uv.exe");
    }

    #[test]
    fn test_fresh_binary_runs_directly() {
        let now = SystemTime::now();
        let modified = now - Duration::from_secs(60);
        assert_eq!(classify(modified, now), ShimAction::Run);
    }

    #[test]
    fn test_stale_binary_is_refreshed() {
        let now = SystemTime::now();
        let modified = now - STALE_AFTER - Duration::from_secs(1);
        assert_eq!(classify(modified, now), ShimAction::Refresh);
    }

    #[test]
    fn test_exactly_at_cutoff_is_still_fresh() {
        let now = SystemTime::now();
        assert_eq!(classify(now - STALE_AFTER, now), ShimAction::Run);
    }

    #[test]
    fn test_future_mtime_counts_as_fresh() {
        let now = SystemTime::now();
        assert_eq!(classify(now + Duration::from_secs(60), now), ShimAction::Run);
    }

    #[test]
    fn test_missing_tool_plans_install() {
        let dir = tempfile::tempdir().unwrap();
        let action = plan(&dir.path().join("missing"), SystemTime::now()).unwrap();
        assert_eq!(action, ShimAction::Install);
    }

    #[test]
    fn test_just_written_tool_plans_run() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("tool");
        std::fs::write(&tool, b"#!/bin/sh\n").unwrap();
        assert_eq!(plan(&tool, SystemTime::now()).unwrap(), ShimAction::Run);
    }
}
