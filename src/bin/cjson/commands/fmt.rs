use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::info;

use chemjson::{CjsonFormat, Molecule};

use crate::cli::FmtArgs;
use crate::config::build_write_options;
use crate::io::{create_output, describe, open_input, stdin_is_tty};

pub fn run_fmt(args: FmtArgs) -> Result<()> {
    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: cjson fmt -i <FILE> or pipe data via stdin."
        );
    }

    let options = build_write_options(&args)?;
    let source = describe(args.input.as_deref(), "<stdin>");
    let target = describe(args.output.as_deref(), "<stdout>");

    let mut format = CjsonFormat::with_options(options);
    let mut molecule = Molecule::new();
    let input = open_input(args.input.as_deref())?;
    format
        .read(input, &mut molecule)
        .with_context(|| format!("Failed to read {source}"))?;

    // Create the output only after a successful read so a failed rewrite in
    // place never truncates the input.
    let mut output = create_output(args.output.as_deref())?;
    format
        .write(&molecule, &mut output)
        .with_context(|| format!("Failed to write {target}"))?;
    output
        .flush()
        .with_context(|| format!("Failed to flush {target}"))?;

    info!(
        source = %source,
        target = %target,
        atoms = molecule.atom_count(),
        bonds = molecule.bond_count(),
        warnings = format.diagnostics().len(),
        "document rewritten"
    );
    Ok(())
}
