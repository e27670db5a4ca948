use super::access::{self, Object};
use super::{BASIS_SET_KEY, GAUSSIAN_BASIS_TYPE, INCHI_KEY, MARKER_KEY, NAME_KEY, UNIT_CELL_KEY};
use crate::io::error::Error;
use crate::model::{
    basis::{BasisSet, GaussianSet, ScfType},
    cell::UnitCell,
    system::Molecule,
};
use serde_json::Value;
use std::io::Read;
use tracing::{debug, warn};

const NO_BONDS_WARNING: &str = "warning: no bonding information found";

pub fn read<R: Read>(reader: R) -> Result<Molecule, Error> {
    let mut molecule = Molecule::new();
    let mut warnings = Vec::new();
    read_into(reader, &mut molecule, &mut warnings)?;
    Ok(molecule)
}

pub fn read_into<R: Read>(
    reader: R,
    molecule: &mut Molecule,
    warnings: &mut Vec<String>,
) -> Result<(), Error> {
    let root: Value = serde_json::from_reader(reader)?;
    read_document(&root, molecule, warnings)
}

pub fn read_document(
    root: &Value,
    molecule: &mut Molecule,
    warnings: &mut Vec<String>,
) -> Result<(), Error> {
    let root = root.as_object().ok_or(Error::NotAnObject)?;
    if !access::has_key(root, MARKER_KEY) {
        return Err(Error::MissingMarker);
    }

    read_metadata(root, molecule);

    let cell = read_unit_cell(root)?;
    if let Some(cell) = cell {
        molecule.unit_cell = Some(cell);
    }

    read_basis_set(root, molecule);

    let first_atom = read_atoms(root, cell.as_ref(), molecule)?;
    read_bonds(root, first_atom, molecule, warnings)?;

    debug!(
        atoms = molecule.atom_count(),
        bonds = molecule.bond_count(),
        periodic = molecule.is_periodic(),
        "read Chemical JSON document"
    );
    Ok(())
}

fn read_metadata(root: &Object, molecule: &mut Molecule) {
    for key in [NAME_KEY, INCHI_KEY] {
        if let Some(text) = access::lenient_str(root, key) {
            molecule.set_data(key, text);
        }
    }
}

fn read_unit_cell(root: &Object) -> Result<Option<UnitCell>, Error> {
    let Some(cell) = access::object(root, UNIT_CELL_KEY, "unit cell")? else {
        return Ok(None);
    };
    let param = |key: &str| access::number(cell, key).ok_or(Error::InvalidUnitCell);

    let cell = UnitCell::from_degrees(
        param("a")?,
        param("b")?,
        param("c")?,
        param("alpha")?,
        param("beta")?,
        param("gamma")?,
    );
    debug!(a = cell.a(), b = cell.b(), c = cell.c(), "read unit cell");
    Ok(Some(cell))
}

fn read_basis_set(root: &Object, molecule: &mut Molecule) {
    let Some(Value::Object(basis)) = root.get(BASIS_SET_KEY) else {
        return;
    };
    match access::lenient_str(basis, "basisType") {
        Some(GAUSSIAN_BASIS_TYPE) => {
            let scf_type = access::lenient_str(basis, "scfType")
                .and_then(|tag| tag.parse::<ScfType>().ok())
                .unwrap_or_default();
            molecule.basis_set = Some(BasisSet::Gaussian(GaussianSet::new(scf_type)));
        }
        other => debug!(basis_type = ?other, "ignoring unsupported basis set"),
    }
}

fn read_atoms(
    root: &Object,
    cell: Option<&UnitCell>,
    molecule: &mut Molecule,
) -> Result<usize, Error> {
    let atoms = access::object(root, "atoms", "atoms")?.ok_or(Error::MissingKey("atoms"))?;
    let elements = access::object(atoms, "elements", "atoms.elements")?
        .ok_or(Error::MissingKey("atoms.elements"))?;
    let numbers = access::array(elements, "number", "atoms.elements.number")?
        .ok_or(Error::MissingKey("atoms.elements.number"))?;
    let numbers = access::integers(numbers, "atoms.elements.number")?;

    let first = molecule.atom_count();
    for &z in &numbers {
        molecule.add_atom(access::narrow_u8(z));
    }
    let count = numbers.len();

    let Some(coords) = access::object(atoms, "coords", "atoms.coords")? else {
        return Ok(first);
    };
    let placed = &mut molecule.atoms[first..];

    if let Some(values) = access::non_empty_array(coords, "3d", "atoms.coords.3d")? {
        let positions = triples(values, count, "atoms.coords.3d")?;
        for (atom, p) in placed.iter_mut().zip(positions) {
            atom.position3d = Some(p);
        }
    }

    if let Some(values) = access::non_empty_array(coords, "2d", "atoms.coords.2d")? {
        let expected = 2 * count;
        if values.len() != expected {
            return Err(Error::CountMismatch {
                key: "atoms.coords.2d",
                expected,
                found: values.len(),
            });
        }
        let flat = access::reals(values, "atoms.coords.2d")?;
        for (atom, p) in placed.iter_mut().zip(flat.chunks_exact(2)) {
            atom.position2d = Some([p[0], p[1]]);
        }
    }

    if let Some(values) =
        access::non_empty_array(coords, "3d fractional", "atoms.coords.3d fractional")?
    {
        let cell = cell.ok_or(Error::FractionalWithoutCell)?;
        let fractional = triples(values, count, "atoms.coords.3d fractional")?;
        if cell.is_degenerate() {
            return Err(Error::DegenerateUnitCell);
        }
        let cartesian = cell.cartesian_coordinates(&fractional);
        if cartesian.iter().flatten().any(|x| !x.is_finite()) {
            return Err(Error::DegenerateUnitCell);
        }
        for (atom, p) in placed.iter_mut().zip(cartesian) {
            atom.position3d = Some(p);
        }
    }

    Ok(first)
}

fn triples(values: &[Value], count: usize, path: &'static str) -> Result<Vec<[f64; 3]>, Error> {
    let expected = 3 * count;
    if values.len() != expected {
        return Err(Error::CountMismatch {
            key: path,
            expected,
            found: values.len(),
        });
    }
    let flat = access::reals(values, path)?;
    Ok(flat.chunks_exact(3).map(|p| [p[0], p[1], p[2]]).collect())
}

fn read_bonds(
    root: &Object,
    first_atom: usize,
    molecule: &mut Molecule,
    warnings: &mut Vec<String>,
) -> Result<(), Error> {
    let Some(bonds) = access::object(root, "bonds", "bonds")? else {
        return Ok(());
    };

    let connections = access::object(bonds, "connections", "bonds.connections")?
        .ok_or(Error::MissingKey("bonds.connections"))?;
    let index = access::array(connections, "index", "bonds.connections.index")?;

    let first_bond = molecule.bond_count();
    let atom_count = molecule.atom_count() - first_atom;
    let mut bond_count = 0;

    match index {
        Some(values) => {
            if values.len() % 2 != 0 {
                return Err(Error::OddConnectionCount(values.len()));
            }
            let indices = access::integers(values, "bonds.connections.index")?;
            for (bond, pair) in indices.chunks_exact(2).enumerate() {
                let i = atom_index(pair[0], bond, first_atom, atom_count)?;
                let j = atom_index(pair[1], bond, first_atom, atom_count)?;
                molecule.add_bond(i, j, 1);
            }
            bond_count = indices.len() / 2;
        }
        None => {
            warn!("document has bonds.connections without an index array");
            warnings.push(NO_BONDS_WARNING.to_string());
        }
    }

    if let Some(values) = access::array(bonds, "order", "bonds.order")? {
        if values.len() != bond_count {
            return Err(Error::BondOrderCountMismatch {
                bonds: bond_count,
                orders: values.len(),
            });
        }
        let orders = access::integers(values, "bonds.order")?;
        for (bond, order) in molecule.bonds[first_bond..].iter_mut().zip(orders) {
            bond.order = access::narrow_u8(order);
        }
    }

    Ok(())
}

fn atom_index(
    raw: i64,
    bond: usize,
    first_atom: usize,
    atom_count: usize,
) -> Result<usize, Error> {
    match usize::try_from(raw) {
        Ok(idx) if idx < atom_count => Ok(first_atom + idx),
        _ => Err(Error::BondAtomOutOfRange {
            bond,
            atom: raw,
            atom_count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::error::ErrorKind;
    use crate::model::metadata::MetaValue;
    use crate::model::system::Bond;

    fn read_str(text: &str) -> Result<Molecule, Error> {
        read(text.as_bytes())
    }

    fn read_with_warnings(text: &str) -> (Result<(), Error>, Molecule, Vec<String>) {
        let mut molecule = Molecule::new();
        let mut warnings = Vec::new();
        let result = read_into(text.as_bytes(), &mut molecule, &mut warnings);
        (result, molecule, warnings)
    }

    #[test]
    fn reads_minimal_document_with_default_bond_order() {
        let mol = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1,8]}},"bonds":{"connections":{"index":[0,1]}}}"#,
        )
        .expect("valid document");

        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.atoms[0].atomic_number, 1);
        assert_eq!(mol.atoms[1].atomic_number, 8);
        assert_eq!(mol.bonds, vec![Bond::new(0, 1, 1)]);
        assert!(mol.atoms.iter().all(|a| a.position3d.is_none()));
        assert!(mol.atoms.iter().all(|a| a.position2d.is_none()));
        assert!(mol.unit_cell.is_none());
    }

    #[test]
    fn marker_value_is_not_interpreted() {
        for marker in ["0", "\"yes\"", "{}", "false"] {
            let text = format!(
                r#"{{"chemical json": {marker}, "atoms": {{"elements": {{"number": [6]}}}}}}"#
            );
            assert!(read_str(&text).is_ok(), "marker {marker} rejected");
        }
    }

    #[test]
    fn malformed_json_is_reported_with_position() {
        let err = read_str("{\"chemical json\": 0,").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn non_object_root_is_not_this_format() {
        let err = read_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::NotAnObject));
        assert_eq!(err.kind(), ErrorKind::NotThisFormat);
    }

    #[test]
    fn missing_marker_adds_no_atoms() {
        let (result, mol, _) =
            read_with_warnings(r#"{"name": "x", "atoms": {"elements": {"number": [6, 6]}}}"#);
        assert!(matches!(result, Err(Error::MissingMarker)));
        assert_eq!(mol.atom_count(), 0);
        assert!(mol.data.is_empty());

        let (result, _, _) =
            read_with_warnings(r#"{"chemical json": null, "atoms": {"elements": {"number": [6]}}}"#);
        assert!(matches!(result, Err(Error::MissingMarker)));
    }

    #[test]
    fn copies_string_metadata_and_ignores_other_types() {
        let mol = read_str(
            r#"{"chemical json":0,"name":"ethane","inchi":7,"atoms":{"elements":{"number":[6,6]}}}"#,
        )
        .unwrap();
        assert_eq!(mol.data("name"), Some(&MetaValue::from("ethane")));
        assert!(mol.data("inchi").is_none());
    }

    #[test]
    fn missing_atoms_block_fails() {
        let err = read_str(r#"{"chemical json":0}"#).unwrap_err();
        assert!(matches!(err, Error::MissingKey("atoms")));

        let err = read_str(r#"{"chemical json":0,"atoms":[1]}"#).unwrap_err();
        assert!(matches!(err, Error::WrongType { key: "atoms", .. }));

        let err = read_str(r#"{"chemical json":0,"atoms":{"elements":{}}}"#).unwrap_err();
        assert!(matches!(err, Error::MissingKey("atoms.elements.number")));

        let err = read_str(r#"{"chemical json":0,"atoms":{"elements":{"number":6}}}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn atomic_numbers_are_truncated_and_wrapped() {
        let mol = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[6.9, 300, 0]}}}"#,
        )
        .unwrap();
        let numbers: Vec<u8> = mol.atoms.iter().map(|a| a.atomic_number).collect();
        assert_eq!(numbers, vec![6, 44, 0]);

        let err = read_str(r#"{"chemical json":0,"atoms":{"elements":{"number":["C"]}}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::WrongType {
                key: "atoms.elements.number",
                ..
            }
        ));
    }

    #[test]
    fn empty_elements_is_a_valid_empty_molecule() {
        let mol = read_str(r#"{"chemical json":0,"atoms":{"elements":{"number":[]}}}"#).unwrap();
        assert_eq!(mol.atom_count(), 0);
        assert_eq!(mol.bond_count(), 0);
    }

    #[test]
    fn reads_cartesian_and_2d_coordinates_in_atom_order() {
        let mol = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[8,1]},
                "coords":{"3d":[0,0,0, 0.96,0,0.5],"2d":[1,2, 3,4]}}}"#,
        )
        .unwrap();
        assert_eq!(mol.atoms[0].position3d, Some([0.0, 0.0, 0.0]));
        assert_eq!(mol.atoms[1].position3d, Some([0.96, 0.0, 0.5]));
        assert_eq!(mol.atoms[0].position2d, Some([1.0, 2.0]));
        assert_eq!(mol.atoms[1].position2d, Some([3.0, 4.0]));
    }

    #[test]
    fn coordinate_length_mismatch_fails() {
        for coords in ["[0,0,0, 1,1]", "[0,0,0]", "[0,0,0, 1,1,1, 2,2,2]"] {
            let text = format!(
                r#"{{"chemical json":0,"atoms":{{"elements":{{"number":[1,1]}},"coords":{{"3d":{coords}}}}}}}"#
            );
            let err = read_str(&text).unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::CountMismatch {
                        key: "atoms.coords.3d",
                        expected: 6,
                        ..
                    }
                ),
                "coords {coords}: {err}"
            );
        }

        let err = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1,1]},"coords":{"2d":[0,0,0]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::CountMismatch {
                key: "atoms.coords.2d",
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn empty_coordinate_arrays_are_ignored() {
        let mol = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1]},
                "coords":{"3d":[],"2d":[],"3d fractional":[]}}}"#,
        )
        .expect("empty arrays mean absent");
        assert!(mol.atoms[0].position3d.is_none());
        assert!(mol.atoms[0].position2d.is_none());
    }

    #[test]
    fn non_numeric_coordinates_fail() {
        let err = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1]},"coords":{"3d":[0,"x",0]}}}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn unit_cell_angles_are_converted_to_radians() {
        let mol = read_str(
            r#"{"chemical json":0,"unit cell":{"a":3,"b":4,"c":5,"alpha":90,"beta":90,"gamma":120},
                "atoms":{"elements":{"number":[14]}}}"#,
        )
        .unwrap();
        let cell = mol.unit_cell.expect("cell attached");
        assert_eq!((cell.a(), cell.b(), cell.c()), (3.0, 4.0, 5.0));
        assert!((cell.alpha() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((cell.gamma() - 2.0 * std::f64::consts::FRAC_PI_3).abs() < 1e-12);
    }

    #[test]
    fn incomplete_unit_cell_fails() {
        let err = read_str(
            r#"{"chemical json":0,"unit cell":{"a":3,"b":4,"c":5,"alpha":90,"beta":"90","gamma":90},
                "atoms":{"elements":{"number":[14]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidUnitCell));

        let err = read_str(
            r#"{"chemical json":0,"unit cell":{"a":3,"b":4,"c":5,"alpha":90,"beta":90},
                "atoms":{"elements":{"number":[14]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidUnitCell));
    }

    #[test]
    fn fractional_coordinates_are_stored_as_cartesian() {
        let mol = read_str(
            r#"{"chemical json":0,"unit cell":{"a":10,"b":10,"c":10,"alpha":90,"beta":90,"gamma":90},
                "atoms":{"elements":{"number":[11,17]},"coords":{"3d fractional":[0,0,0, 0.5,0.5,0.5]}}}"#,
        )
        .unwrap();
        let p = mol.atoms[1].position3d.expect("converted position");
        for k in 0..3 {
            assert!((p[k] - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn fractional_coordinates_override_cartesian() {
        let mol = read_str(
            r#"{"chemical json":0,"unit cell":{"a":2,"b":2,"c":2,"alpha":90,"beta":90,"gamma":90},
                "atoms":{"elements":{"number":[1]},"coords":{"3d":[9,9,9],"3d fractional":[0.5,0,0]}}}"#,
        )
        .unwrap();
        let p = mol.atoms[0].position3d.unwrap();
        assert!((p[0] - 1.0).abs() < 1e-12 && p[1].abs() < 1e-12 && p[2].abs() < 1e-12);
    }

    #[test]
    fn fractional_coordinates_without_cell_fail() {
        let err = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1]},"coords":{"3d fractional":[0.1,0.2,0.3]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::FractionalWithoutCell));
        assert_eq!(err.kind(), ErrorKind::Consistency);
    }

    #[test]
    fn fractional_check_ignores_a_cell_already_on_the_molecule() {
        let mut mol = Molecule::new();
        mol.unit_cell = Some(UnitCell::from_degrees(1.0, 1.0, 1.0, 90.0, 90.0, 90.0));
        let mut warnings = Vec::new();
        let result = read_into(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1]},"coords":{"3d fractional":[0,0,0]}}}"#
                .as_bytes(),
            &mut mol,
            &mut warnings,
        );
        assert!(matches!(result, Err(Error::FractionalWithoutCell)));
    }

    #[test]
    fn bond_orders_are_applied_in_order() {
        let mol = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[6,6,8]}},
                "bonds":{"connections":{"index":[0,1, 1,2]},"order":[2,1]}}"#,
        )
        .unwrap();
        assert_eq!(mol.bonds, vec![Bond::new(0, 1, 2), Bond::new(1, 2, 1)]);
    }

    #[test]
    fn bond_order_count_mismatch_fails() {
        let err = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[6,6,8]}},
                "bonds":{"connections":{"index":[0,1, 1,2]},"order":[2]}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::BondOrderCountMismatch {
                bonds: 2,
                orders: 1
            }
        ));
    }

    #[test]
    fn bond_endpoints_must_name_read_atoms() {
        let err = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1,1]}},"bonds":{"connections":{"index":[0,2]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::BondAtomOutOfRange {
                bond: 0,
                atom: 2,
                atom_count: 2
            }
        ));

        let err = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1,1]}},"bonds":{"connections":{"index":[-1,0]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::BondAtomOutOfRange { atom: -1, .. }));
    }

    #[test]
    fn odd_connection_array_fails() {
        let err = read_str(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1,1]}},"bonds":{"connections":{"index":[0,1,1]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::OddConnectionCount(3)));
    }

    #[test]
    fn missing_connection_index_is_only_a_warning() {
        let (result, mol, warnings) = read_with_warnings(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1,1]}},"bonds":{"connections":{}}}"#,
        );
        assert!(result.is_ok());
        assert_eq!(mol.bond_count(), 0);
        assert_eq!(warnings, vec![NO_BONDS_WARNING.to_string()]);
    }

    #[test]
    fn bonds_block_without_connections_fails() {
        let (result, mol, warnings) = read_with_warnings(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1,1]}},"bonds":{"order":[]}}"#,
        );
        let err = result.unwrap_err();
        assert!(matches!(err, Error::MissingKey("bonds.connections")));
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert_eq!(err.to_string(), "no \"bonds.connections\" key found");
        assert_eq!(mol.bond_count(), 0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn impossible_cell_angles_reject_fractional_coordinates() {
        let err = read_str(
            r#"{"chemical json":0,
                "unit cell":{"a":1,"b":1,"c":1,"alpha":10,"beta":10,"gamma":170},
                "atoms":{"elements":{"number":[6]},"coords":{"3d fractional":[0.1,0.2,0.3]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DegenerateUnitCell));
        assert_eq!(err.kind(), ErrorKind::Consistency);
    }

    #[test]
    fn collapsed_cell_rejects_fractional_coordinates() {
        let err = read_str(
            r#"{"chemical json":0,
                "unit cell":{"a":2,"b":2,"c":0,"alpha":90,"beta":90,"gamma":90},
                "atoms":{"elements":{"number":[8]},"coords":{"3d fractional":[0.5,0.5,0.5]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DegenerateUnitCell));
    }

    #[test]
    fn reads_append_after_existing_atoms() {
        let mut mol = Molecule::new();
        mol.add_atom(26);
        let mut warnings = Vec::new();
        read_into(
            r#"{"chemical json":0,"atoms":{"elements":{"number":[1,1]},"coords":{"3d":[0,0,0,1,0,0]}},
                "bonds":{"connections":{"index":[0,1]}}}"#
                .as_bytes(),
            &mut mol,
            &mut warnings,
        )
        .unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert!(mol.atoms[0].position3d.is_none());
        assert_eq!(mol.atoms[2].position3d, Some([1.0, 0.0, 0.0]));
        assert_eq!(mol.bonds, vec![Bond::new(1, 2, 1)]);
    }

    #[test]
    fn failed_read_keeps_earlier_mutations() {
        let (result, mol, _) = read_with_warnings(
            r#"{"chemical json":0,"name":"broken","atoms":{"elements":{"number":[6,6]},"coords":{"3d":[0]}}}"#,
        );
        assert!(result.is_err());
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.data("name").and_then(MetaValue::as_str), Some("broken"));
    }

    #[test]
    fn gaussian_basis_set_is_recognized() {
        let mol = read_str(
            r#"{"chemical json":0,"basisSet":{"basisType":"GTO","scfType":"uhf"},
                "atoms":{"elements":{"number":[1]}}}"#,
        )
        .unwrap();
        let basis = mol.basis_set.expect("basis attached");
        assert_eq!(basis.as_gaussian().map(|g| g.scf_type), Some(ScfType::Uhf));
    }

    #[test]
    fn unsupported_basis_sets_are_ignored() {
        for basis in [
            r#"{"basisType":"STO","scfType":"rhf"}"#,
            r#""GTO""#,
            r#"{"scfType":"rhf"}"#,
        ] {
            let text = format!(
                r#"{{"chemical json":0,"basisSet":{basis},"atoms":{{"elements":{{"number":[1]}}}}}}"#
            );
            let mol = read_str(&text).expect("basis set never fails a read");
            assert!(mol.basis_set.is_none(), "basis {basis} was attached");
        }

        let mol = read_str(
            r#"{"chemical json":0,"basisSet":{"basisType":"GTO","scfType":"mp2"},
                "atoms":{"elements":{"number":[1]}}}"#,
        )
        .unwrap();
        assert_eq!(mol.basis_set.map(|b| b.scf_type()), Some(ScfType::Unknown));
    }
}
