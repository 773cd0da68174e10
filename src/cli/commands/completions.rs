//! Shell completion generation

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell as ClapShell;

use crate::cli::args::{Cli, CompletionsArgs, Shell};

const fn clap_shell(shell: Shell) -> ClapShell {
    match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    }
}

/// Write a completion script for `shell` to `out`.
pub fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(clap_shell(shell), &mut cmd, "yamlenv", out);
}

/// Generate and print a shell completion script to stdout.
pub fn run(args: &CompletionsArgs) {
    write_script(args.shell, &mut std::io::stdout());
}
