use super::{
    BASIS_SET_KEY, GAUSSIAN_BASIS_TYPE, INCHI_KEY, MARKER_KEY, NAME_KEY, UNIT_CELL_KEY,
    WriteOptions,
};
use crate::io::error::Error;
use crate::model::{basis::BasisSet, metadata::MetaValue, system::Molecule};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value, json};
use std::io::Write;
use tracing::{debug, warn};

pub fn write<W: Write>(
    mut writer: W,
    molecule: &Molecule,
    options: &WriteOptions,
) -> Result<(), Error> {
    let document = to_document(molecule);

    let formatter = PrettyFormatter::with_indent(options.indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    document.serialize(&mut serializer)?;
    writeln!(writer)?;
    Ok(())
}

pub fn to_document(molecule: &Molecule) -> Value {
    let mut root = Map::new();
    root.insert(MARKER_KEY.to_string(), json!(0));

    for key in [NAME_KEY, INCHI_KEY] {
        if let Some(text) = molecule.data(key).and_then(MetaValue::as_str) {
            root.insert(key.to_string(), json!(text));
        }
    }

    if let Some(cell) = &molecule.unit_cell {
        root.insert(
            UNIT_CELL_KEY.to_string(),
            json!({
                "a": cell.a(),
                "b": cell.b(),
                "c": cell.c(),
                "alpha": cell.alpha_degrees(),
                "beta": cell.beta_degrees(),
                "gamma": cell.gamma_degrees(),
            }),
        );
    }

    match &molecule.basis_set {
        Some(BasisSet::Gaussian(set)) => {
            root.insert(
                BASIS_SET_KEY.to_string(),
                json!({
                    "basisType": GAUSSIAN_BASIS_TYPE,
                    "scfType": set.scf_type.as_tag(),
                }),
            );
        }
        Some(other) => debug!(scf_type = %other.scf_type(), "skipping non-Gaussian basis set"),
        None => {}
    }

    if molecule.atom_count() > 0 {
        root.insert("atoms".to_string(), atoms_block(molecule));
    }

    if molecule.bond_count() > 0 {
        root.insert("bonds".to_string(), bonds_block(molecule));
    }

    debug!(
        atoms = molecule.atom_count(),
        bonds = molecule.bond_count(),
        "built Chemical JSON document"
    );
    Value::Object(root)
}

fn atoms_block(molecule: &Molecule) -> Value {
    let numbers: Vec<u8> = molecule.atoms.iter().map(|a| a.atomic_number).collect();

    let mut coords = Map::new();
    if let Some(positions) = molecule.positions3d() {
        let fractional = molecule
            .unit_cell
            .as_ref()
            .map(|cell| cell.fractional_coordinates(&positions));
        match fractional {
            Some(Ok(fractional)) => {
                coords.insert(
                    "3d fractional".to_string(),
                    Value::from(fractional.as_flattened()),
                );
            }
            Some(Err(e)) => {
                warn!(error = %e, "writing Cartesian coordinates for a periodic molecule");
                coords.insert("3d".to_string(), Value::from(positions.as_flattened()));
            }
            None => {
                coords.insert("3d".to_string(), Value::from(positions.as_flattened()));
            }
        }
    }
    if let Some(positions) = molecule.positions2d() {
        coords.insert("2d".to_string(), Value::from(positions.as_flattened()));
    }

    let mut atoms = Map::new();
    atoms.insert("elements".to_string(), json!({ "number": numbers }));
    if !coords.is_empty() {
        atoms.insert("coords".to_string(), Value::Object(coords));
    }
    Value::Object(atoms)
}

fn bonds_block(molecule: &Molecule) -> Value {
    let index: Vec<usize> = molecule.bonds.iter().flat_map(|b| [b.i, b.j]).collect();
    let order: Vec<u8> = molecule.bonds.iter().map(|b| b.order).collect();
    json!({
        "connections": { "index": index },
        "order": order,
    })
}
