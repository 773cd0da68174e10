//! `yamlenv` - Flatten hierarchical YAML configuration into environment variables

use clap::Parser;

use yamlenv::cli::args::Cli;
use yamlenv::cli::commands;
use yamlenv::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
