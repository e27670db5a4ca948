use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::info;

use chemjson::{BasisSet, CjsonFormat, Molecule};

use crate::cli::CheckArgs;
use crate::io::{describe, open_input, stdin_is_tty};

pub fn run_check(args: CheckArgs) -> Result<()> {
    if args.input.is_none() && stdin_is_tty() {
        bail!("No input file specified and stdin is a terminal.\n\nUsage: cjson check <FILE>");
    }

    let source = describe(args.input.as_deref(), "<stdin>");
    let input = open_input(args.input.as_deref())?;

    let mut format = CjsonFormat::new();
    let mut molecule = Molecule::new();
    format
        .read(input, &mut molecule)
        .with_context(|| format!("{source} is not a valid Chemical JSON document"))?;
    info!(source = %source, atoms = molecule.atom_count(), "document is valid");

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render_summary(&source, &molecule, format.diagnostics()).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn coordinate_kinds(molecule: &Molecule) -> Vec<&'static str> {
    let mut kinds = Vec::new();
    if molecule.positions3d().is_some() {
        kinds.push(if molecule.is_periodic() {
            "3d (fractional on write)"
        } else {
            "3d"
        });
    }
    if molecule.positions2d().is_some() {
        kinds.push("2d");
    }
    kinds
}

pub fn render_summary(source: &str, molecule: &Molecule, diagnostics: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{source}: ok");
    if let Some(name) = molecule.data("name") {
        let _ = writeln!(out, "  name:        {name}");
    }
    if let Some(inchi) = molecule.data("inchi") {
        let _ = writeln!(out, "  inchi:       {inchi}");
    }
    if molecule.atom_count() > 0 {
        let _ = writeln!(out, "  formula:     {}", molecule.formula());
    }
    let _ = writeln!(out, "  atoms:       {}", molecule.atom_count());
    let _ = writeln!(out, "  bonds:       {}", molecule.bond_count());

    let kinds = coordinate_kinds(molecule);
    let kinds = if kinds.is_empty() {
        "none".to_string()
    } else {
        kinds.join(", ")
    };
    let _ = writeln!(out, "  coordinates: {kinds}");

    if let Some(cell) = &molecule.unit_cell {
        let _ = writeln!(
            out,
            "  unit cell:   a={:.4} b={:.4} c={:.4} alpha={:.2} beta={:.2} gamma={:.2}",
            cell.a(),
            cell.b(),
            cell.c(),
            cell.alpha_degrees(),
            cell.beta_degrees(),
            cell.gamma_degrees()
        );
    }
    match &molecule.basis_set {
        Some(BasisSet::Gaussian(set)) => {
            let _ = writeln!(out, "  basis set:   GTO ({})", set.scf_type);
        }
        Some(BasisSet::Slater(set)) => {
            let _ = writeln!(out, "  basis set:   STO ({})", set.scf_type);
        }
        None => {}
    }

    if !diagnostics.is_empty() {
        let _ = writeln!(out, "  diagnostics:");
        for line in diagnostics {
            let _ = writeln!(out, "    {line}");
        }
    }
    out
}
