pub const MAX_ATOMIC_NUMBER: u8 = 118;

const SYMBOLS: [&str; MAX_ATOMIC_NUMBER as usize + 1] = [
    "", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

#[inline]
pub fn symbol(atomic_number: u8) -> Option<&'static str> {
    match atomic_number {
        1..=MAX_ATOMIC_NUMBER => Some(SYMBOLS[atomic_number as usize]),
        _ => None,
    }
}

pub fn atomic_number(symbol: &str) -> Option<u8> {
    SYMBOLS
        .iter()
        .skip(1)
        .position(|s| s.eq_ignore_ascii_case(symbol))
        .map(|idx| idx as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_cover_the_whole_table() {
        assert_eq!(symbol(1), Some("H"));
        assert_eq!(symbol(6), Some("C"));
        assert_eq!(symbol(26), Some("Fe"));
        assert_eq!(symbol(118), Some("Og"));
    }

    #[test]
    fn dummy_and_out_of_range_have_no_symbol() {
        assert_eq!(symbol(0), None);
        assert_eq!(symbol(119), None);
        assert_eq!(symbol(255), None);
    }

    #[test]
    fn lookup_by_symbol_is_case_insensitive() {
        assert_eq!(atomic_number("O"), Some(8));
        assert_eq!(atomic_number("cl"), Some(17));
        assert_eq!(atomic_number("Xx"), None);
        assert_eq!(atomic_number(""), None);
    }
}
