use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "doctestpp",
    version,
    about = "Generate UnitTest++ test cases from @test blocks in source comments"
)]
pub struct Cli {
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: Format,

    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
    GithubActions,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate test source from the @test blocks of one file
    #[command(alias = "gen")]
    Generate {
        /// Source file to read
        input: PathBuf,

        /// Output file (default: standard output)
        output: Option<PathBuf>,

        /// Suite for tests that do not name one
        #[arg(long)]
        suite: Option<String>,

        /// Do not emit #line directives
        #[arg(long)]
        no_line_directives: bool,
    },

    /// List the tests found in files and directories
    #[command(alias = "ls")]
    List {
        /// Files or directories to scan (default: current directory)
        paths: Vec<PathBuf>,
    },

    /// Verify that every @test block parses, failing on the first bad block per file
    Check {
        /// Files or directories to scan (default: current directory)
        paths: Vec<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Log level selected by the number of `-v` flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
