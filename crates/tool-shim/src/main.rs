//! Tool shim launcher
//!
//! Keeps a uv-managed Python CLI tool installed under the per-user shim
//! directory, then delegates to it with all arguments forwarded and its
//! exit code mirrored. On each launch:
//!
//! - tool missing: bootstrap uv if needed, then install the tool
//! - tool older than the freshness window: delete it and reinstall
//! - otherwise: run it directly

use std::time::SystemTime;

use anyhow::{Context, Result};
use colored::Colorize;
use launcher_core::{plan, ShimAction, ShimPaths, ToolConfig, ToolInstaller};

/// Tool name is baked in at build time
const TOOL_NAME: &str = match option_env!("SHIM_TOOL") {
    Some(name) => name,
    None => "repo",
};

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red());
            std::process::exit(launcher_core::FAILURE_CODE);
        }
    }
}

async fn run() -> Result<i32> {
    let paths = ShimPaths::resolve(TOOL_NAME)?;
    let installer = ToolInstaller::new(
        ToolConfig {
            name: TOOL_NAME,
            display_name: TOOL_NAME,
        },
        paths.clone(),
    );

    let action = plan(&paths.tool_path, SystemTime::now())
        .with_context(|| format!("checking {}", paths.tool_path.display()))?;
    match action {
        ShimAction::Run => {}
        ShimAction::Install => {
            if !installer.uv_installed() {
                installer.bootstrap_uv().await?;
            }
            installer.install().await?;
        }
        ShimAction::Refresh => {
            installer
                .refresh()
                .await
                .with_context(|| format!("refreshing {TOOL_NAME}"))?;
        }
    }

    let code = launcher_core::run_forwarding(&paths.tool_path, std::env::args_os().skip(1))?;
    Ok(code)
}
