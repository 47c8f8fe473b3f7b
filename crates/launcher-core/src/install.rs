//! uv bootstrap and tool installation
//!
//! Provides the provisioning side of the tool shim: getting a uv binary in
//! place (via the official install script) and installing the shimmed tool
//! into the per-user shim directory. Installer subprocesses run with
//! captured output; on failure the captured stdout/stderr is printed for
//! diagnosis and the launcher aborts.

use colored::Colorize;
use tokio::process::Command;

use crate::error::{LauncherError, Result};
use crate::shim::ShimPaths;

/// Environment variable uv reads to redirect installed shims
const UV_TOOL_BIN_DIR: &str = "UV_TOOL_BIN_DIR";

/// Configuration for a shimmed tool, baked into each launcher binary
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Package name passed to `uv tool install`
    pub name: &'static str,
    /// Display name for user-facing diagnostics
    pub display_name: &'static str,
}

/// Installs uv and uv-managed tools into the shim directory
pub struct ToolInstaller {
    config: ToolConfig,
    paths: ShimPaths,
}

impl ToolInstaller {
    pub fn new(config: ToolConfig, paths: ShimPaths) -> Self {
        Self { config, paths }
    }

    /// Whether the uv binary is already present at its expected path
    pub fn uv_installed(&self) -> bool {
        self.paths.uv_path.exists()
    }

    /// Download and run the uv install script for this platform
    pub async fn bootstrap_uv(&self) -> Result<()> {
        eprintln!(
            "{} {}",
            "Bootstrapping".dimmed(),
            "uv".yellow()
        );
        run_captured(bootstrap_command(), "uv installer").await
    }

    /// Install (or reinstall) the tool into the shim directory
    pub async fn install(&self) -> Result<()> {
        std::fs::create_dir_all(&self.paths.shim_dir)?;
        eprintln!(
            "{} {}",
            "Installing".dimmed(),
            self.config.display_name.yellow()
        );
        run_captured(self.install_command(), self.config.display_name).await
    }

    /// Remove the stale binary, then reinstall
    ///
    /// Reinstalling alone leaves the shim's modification time untouched, so
    /// the staleness check would keep firing on every launch.
    pub async fn refresh(&self) -> Result<()> {
        std::fs::remove_file(&self.paths.tool_path)?;
        self.install().await
    }

    fn install_command(&self) -> Command {
        let mut cmd = Command::new(&self.paths.uv_path);
        cmd.args([
            "tool",
            "install",
            "--reinstall",
            "--python-preference=only-managed",
            self.config.name,
        ])
        .env(UV_TOOL_BIN_DIR, &self.paths.shim_dir);
        cmd
    }
}

#[cfg(not(windows))]
fn bootstrap_command() -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg("curl -fsSL https://astral.sh/uv/install.sh | sh");
    cmd
}

#[cfg(windows)]
fn bootstrap_command() -> Command {
    let mut cmd = Command::new("powershell");
    cmd.args([
        "-ExecutionPolicy",
        "Bypass",
        "-Command",
        "[Net.ServicePointManager]::SecurityProtocol = [System.Net.SecurityProtocolType]::Tls12; \
         irm https://astral.sh/uv/install.ps1 | iex",
    ]);
    // The wrong PowerShell standard library gets picked up otherwise.
    // https://github.com/PowerShell/PowerShell/issues/18530#issuecomment-1325691850
    cmd.env_remove("PSMODULEPATH");
    cmd
}

/// Run a command to completion with captured output; on non-zero exit,
/// print the captured streams and fail.
async fn run_captured(mut cmd: Command, what: &str) -> Result<()> {
    let program = cmd.as_std().get_program().to_owned();
    let output = cmd.output().await.map_err(|source| LauncherError::Spawn {
        program: program.into(),
        source,
    })?;

    if output.status.success() {
        return Ok(());
    }

    eprintln!("{}", format!("Error installing {what}:").red());
    eprintln!("Stdout: {}", String::from_utf8_lossy(&output.stdout));
    eprintln!("Stderr: {}", String::from_utf8_lossy(&output.stderr));
    Err(LauncherError::InstallFailed {
        what: what.to_string(),
        code: output.status.code().unwrap_or(-1),
    })
}
