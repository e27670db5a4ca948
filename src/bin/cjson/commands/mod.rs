mod check;
mod fmt;

use check::run_check;
use fmt::run_fmt;

use anyhow::Result;

use crate::cli::Command;

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => run_check(args),
        Command::Fmt(args) => run_fmt(args),
    }
}
