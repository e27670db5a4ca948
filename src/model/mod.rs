//! In-memory molecular model populated and inspected by the codecs in [`crate::io`].
//!
//! - [`atom`] – Atomic number with optional 3D and 2D positions.
//! - [`system`] – The [`Molecule`]: atoms, bonds, unit cell, basis set, and metadata.
//! - [`cell`] – Crystallographic unit cell and the Cartesian/fractional transform.
//! - [`basis`] – Quantum-chemistry basis-set variants and SCF method tags.
//! - [`metadata`] – Values stored in the molecule's free-form metadata bag.
//! - [`elements`] – Periodic table symbols.
//!
//! [`Molecule`]: system::Molecule

pub mod atom;
pub mod basis;
pub mod cell;
pub mod elements;
pub mod metadata;
pub mod system;
