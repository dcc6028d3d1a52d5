use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::Cli;

/// Completion script for `shell`, named after the binary.
fn completion_script(shell: Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut script);
    script
}

pub fn cmd_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let script = completion_script(shell);
    log::debug!("{} completion script: {} bytes", shell, script.len());
    out.write_all(&script)
        .with_context(|| format!("cannot write {} completions", shell))
}
