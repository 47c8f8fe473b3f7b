//! Script relay launcher
//!
//! Locates the script sitting next to this binary and re-executes it under
//! a Python interpreter, forwarding all arguments and mirroring the child's
//! exit code.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

/// Sibling script name and interpreter are baked in at build time
const SCRIPT_NAME: &str = match option_env!("RELAY_SCRIPT") {
    Some(name) => name,
    None => "repo",
};

const INTERPRETER: &str = match option_env!("RELAY_PYTHON") {
    Some(name) => name,
    None => "python",
};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red());
            std::process::exit(launcher_core::FAILURE_CODE);
        }
    }
}

fn run() -> Result<i32> {
    let script = launcher_core::sibling_script(SCRIPT_NAME)?;
    let args = std::iter::once(script.into_os_string()).chain(std::env::args_os().skip(1));
    let code = launcher_core::run_forwarding(Path::new(INTERPRETER), args)?;
    Ok(code)
}
