use anyhow::{Result, bail};

use chemjson::WriteOptions;

use crate::cli::FmtArgs;

const MAX_INDENT: usize = 16;

pub fn build_write_options(args: &FmtArgs) -> Result<WriteOptions> {
    if args.indent > MAX_INDENT {
        bail!(
            "Indent width {} is too large (maximum is {})",
            args.indent,
            MAX_INDENT
        );
    }
    Ok(WriteOptions::with_indent_width(args.indent))
}
