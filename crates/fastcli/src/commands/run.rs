//! Development server command

use anyhow::{Context, Result};
use fastcli_scaffold::process::{ProcessRunner, SystemRunner};
use fastcli_scaffold::server::resolve_server_command;

use crate::cli::RunArgs;
use crate::commands::current_dir;
use crate::output;

/// Launch the development server, blocking until it exits
pub fn run(args: RunArgs) -> Result<()> {
    let cwd = current_dir()?;

    let cmd = resolve_server_command(&cwd, &args.host, args.port, args.reload())
        .context("Failed to resolve server command")?;

    if which::which(&cmd.program).is_err() {
        output::warning(&format!("{} not found in PATH", cmd.program));
    }

    output::info(&format!(
        "Starting development server: {} {}",
        cmd.program,
        cmd.args.join(" ")
    ));

    let arg_refs: Vec<&str> = cmd.args.iter().map(String::as_str).collect();
    let status = SystemRunner
        .run_interactive(&cmd.program, &arg_refs)
        .with_context(|| format!("Failed to launch {}", cmd.program))?;

    match status {
        Some(0) => Ok(()),
        Some(code) => {
            output::error(&format!("Server exited with status {code}"));
            std::process::exit(code);
        }
        None => {
            output::warning("Server terminated by signal");
            Ok(())
        }
    }
}
