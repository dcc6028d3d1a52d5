mod cli;
mod cmd;
mod config;
mod error;
mod extract;
mod generate;
mod line_index;
mod model;
mod output;
mod parser;
mod prefix;
mod scanner;
mod walk;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Command};
use config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        process::exit(2);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let config = match cli.config {
        Some(ref config_path) => Config::from_file(config_path)?,
        None => {
            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            Config::load(&cwd)?
        }
    };

    match cli.command {
        Command::Generate {
            input,
            output,
            suite,
            no_line_directives,
        } => cmd::cmd_generate(
            &config,
            cmd::GenerateOptions {
                input,
                output,
                suite,
                no_line_directives,
            },
        ),
        Command::List { paths } => cmd::cmd_list(&paths, &config, &cli.format),
        Command::Check { paths } => cmd::cmd_check(&paths, &config, &cli.format),
        Command::Completions { shell } => cmd::cmd_completions(shell, &mut std::io::stdout()),
    }
}
