// SPDX-License-Identifier: MIT OR Apache-2.0
//! Completions command - emits shell completion scripts

use anyhow::Result;
use clap_complete::{generate, Shell};

/// Write completions for the given shell to stdout
pub fn run(shell: Shell, command: &mut clap::Command) -> Result<()> {
    let name = command.get_name().to_string();
    generate(shell, command, name, &mut std::io::stdout());
    Ok(())
}
