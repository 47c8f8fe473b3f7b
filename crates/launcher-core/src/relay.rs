//! Process delegation with argument and exit-code forwarding
//!
//! The delegated child inherits the launcher's stdin/stdout/stderr and its
//! exit code becomes the launcher's own. Only a failure to spawn or wait on
//! the child is an error here.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{LauncherError, Result};

/// Generic failure code, used when the launcher itself fails or the child
/// terminated without an exit code
pub const FAILURE_CODE: i32 = 1;

/// Path of a file sitting next to the current executable
pub fn sibling_script(name: &str) -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(name))
}

/// Run `program` with `args`, streams inherited, and return its exit code
pub fn run_forwarding<I, S>(program: &Path, args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| LauncherError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;
    Ok(status.code().unwrap_or(FAILURE_CODE))
}
