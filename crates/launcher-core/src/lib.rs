//! Launcher Core - Shared library for bootstrap launcher binaries
//!
//! This library backs two thin platform launchers:
//!
//! - **tool-shim**: keeps a uv-managed command-line tool installed under the
//!   per-user shim directory (bootstrapping uv itself when needed,
//!   reinstalling the tool when it is missing or stale) and then delegates
//!   to it, and
//! - **script-relay**: re-executes a script sitting next to its own binary
//!   under a Python interpreter.
//!
//! Both launchers forward their argument list verbatim and mirror the
//! delegated process's exit code. The shared pieces live here:
//!
//! - `shim` - shim path resolution and staleness planning
//! - `install` - uv bootstrap and `uv tool install` invocation
//! - `relay` - process delegation with argument and exit-code forwarding
//! - `error` - launcher error types

pub mod error;
pub mod install;
pub mod relay;
pub mod shim;

// Re-export main types for convenience
pub use error::{LauncherError, Result};
pub use install::{ToolConfig, ToolInstaller};
pub use relay::{run_forwarding, sibling_script, FAILURE_CODE};
pub use shim::{plan, ShimAction, ShimPaths, STALE_AFTER};
