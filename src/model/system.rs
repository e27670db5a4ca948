use super::atom::Atom;
use super::basis::BasisSet;
use super::cell::UnitCell;
use super::elements;
use super::metadata::MetaValue;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: u8,
}

impl Bond {
    pub fn new(i: usize, j: usize, order: u8) -> Self {
        Self { i, j, order }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub unit_cell: Option<UnitCell>,
    pub basis_set: Option<BasisSet>,
    pub data: BTreeMap<String, MetaValue>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.unit_cell.is_some()
    }

    pub fn add_atom(&mut self, atomic_number: u8) -> usize {
        self.atoms.push(Atom::new(atomic_number));
        self.atoms.len() - 1
    }

    pub fn add_bond(&mut self, i: usize, j: usize, order: u8) -> Option<usize> {
        if i >= self.atoms.len() || j >= self.atoms.len() {
            return None;
        }
        self.bonds.push(Bond::new(i, j, order));
        Some(self.bonds.len() - 1)
    }

    pub fn positions3d(&self) -> Option<Vec<[f64; 3]>> {
        self.atoms.iter().map(|a| a.position3d).collect()
    }

    pub fn positions2d(&self) -> Option<Vec<[f64; 2]>> {
        self.atoms.iter().map(|a| a.position2d).collect()
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn data(&self, key: &str) -> Option<&MetaValue> {
        self.data.get(key)
    }

    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts
                .entry(elements::symbol(atom.atomic_number).unwrap_or("X"))
                .or_default() += 1;
        }

        let mut formula = String::new();
        let mut push = |symbol: &str, count: usize| {
            formula.push_str(symbol);
            if count > 1 {
                formula.push_str(&count.to_string());
            }
        };

        let has_carbon = counts.contains_key("C");
        if has_carbon {
            for symbol in ["C", "H"] {
                if let Some(count) = counts.remove(symbol) {
                    push(symbol, count);
                }
            }
        }
        for (symbol, count) in counts {
            push(symbol, count);
        }
        formula
    }
}
