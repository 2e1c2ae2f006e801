//! `stepnav completions [SHELL]`

use crate::cli::Cli;
use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

/// Write completions for `shell` (or the shell named by `$SHELL`) to stdout.
pub fn generate(shell: Option<Shell>) -> Result<()> {
    let shell = shell
        .or_else(Shell::from_env)
        .context("Could not detect the shell; pass one explicitly, e.g. `stepnav completions zsh`")?;
    write_completions(shell, &mut std::io::stdout())
}

fn write_completions(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    out.flush().context("Failed to write completions")
}
