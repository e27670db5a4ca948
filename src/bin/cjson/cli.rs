use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cjson",
    about = "Inspect and normalize Chemical JSON (.cjson) documents",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a document and print a summary of its contents
    Check(CheckArgs),

    /// Read a document and write it back in normalized form
    Fmt(FmtArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input file (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Input file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Spaces per nesting level
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub indent: usize,
}

pub fn parse() -> Cli {
    Cli::parse()
}
