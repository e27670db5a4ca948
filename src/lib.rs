//! A pure Rust codec between Chemical JSON (`.cjson`, `chemical/x-cjson`)
//! documents and an in-memory molecular model.
//!
//! # Features
//!
//! - **Validated reading**: Every field is checked for presence and JSON type;
//!   array lengths are reconciled against the atom and bond counts, and the read
//!   fails at the first violation with a descriptive [`io::Error`]
//! - **Coordinate reconciliation**: Cartesian 3D, 2D, and fractional coordinates,
//!   the latter converted through the document's [`UnitCell`]
//! - **Faithful writing**: Periodic molecules are written with fractional
//!   coordinates, unit-cell angles in degrees, and a configurable indent
//!
//! # Quick Start
//!
//! ```
//! use chemjson::io::{self, WriteOptions};
//! use chemjson::{Molecule, UnitCell};
//!
//! let text = r#"{
//!     "chemical json": 0,
//!     "name": "hydroxyl",
//!     "atoms": {
//!         "elements": { "number": [8, 1] },
//!         "coords": { "3d": [0.0, 0.0, 0.0, 0.97, 0.0, 0.0] }
//!     },
//!     "bonds": { "connections": { "index": [0, 1] }, "order": [1] }
//! }"#;
//!
//! let mut molecule = io::read(text.as_bytes())?;
//! assert_eq!(molecule.atom_count(), 2);
//! assert_eq!(molecule.bonds[0].order, 1);
//! assert_eq!(molecule.atoms[1].position3d, Some([0.97, 0.0, 0.0]));
//!
//! // With a unit cell, positions are written as fractional coordinates.
//! molecule.unit_cell = Some(UnitCell::from_degrees(10.0, 10.0, 10.0, 90.0, 90.0, 90.0));
//! let mut out = Vec::new();
//! io::write(&mut out, &molecule, &WriteOptions::default())?;
//! let written = String::from_utf8(out).unwrap();
//! assert!(written.contains("\"3d fractional\""));
//! # Ok::<(), chemjson::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: The Chemical JSON reader, writer, diagnostics, and error type
//!
//! # Data Types
//!
//! - [`Molecule`]: Atoms, bonds, optional unit cell and basis set, metadata
//! - [`Atom`]: Atomic number with optional 3D and 2D positions
//! - [`Bond`]: Bond between two atom indices with an integer order
//! - [`UnitCell`]: Cell parameters and the Cartesian/fractional transform
//! - [`BasisSet`]: Gaussian- or Slater-type basis set with its [`ScfType`]
//! - [`MetaValue`]: Value stored in the molecule's metadata bag

mod model;

pub mod io;

pub use io::{CjsonFormat, Error, ErrorKind, WriteOptions};

pub use model::atom::Atom;
pub use model::basis::{BasisSet, GaussianSet, ParseScfTypeError, ScfType, SlaterSet};
pub use model::cell::{CellError, UnitCell};
pub use model::elements;
pub use model::metadata::MetaValue;
pub use model::system::{Bond, Molecule};
