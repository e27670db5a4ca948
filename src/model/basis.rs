use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid SCF type tag: '{0}'")]
pub struct ParseScfTypeError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScfType {
    Rhf,
    Uhf,
    Rohf,
    Rks,
    Uks,
    Roks,
    #[default]
    Unknown,
}

impl ScfType {
    pub fn as_tag(&self) -> &'static str {
        match self {
            ScfType::Rhf => "rhf",
            ScfType::Rohf => "rohf",
            ScfType::Uhf => "uhf",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ScfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScfType::Rhf => write!(f, "RHF"),
            ScfType::Uhf => write!(f, "UHF"),
            ScfType::Rohf => write!(f, "ROHF"),
            ScfType::Rks => write!(f, "RKS"),
            ScfType::Uks => write!(f, "UKS"),
            ScfType::Roks => write!(f, "ROKS"),
            ScfType::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for ScfType {
    type Err = ParseScfTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rhf" => Ok(ScfType::Rhf),
            "uhf" => Ok(ScfType::Uhf),
            "rohf" => Ok(ScfType::Rohf),
            "rks" => Ok(ScfType::Rks),
            "uks" => Ok(ScfType::Uks),
            "roks" => Ok(ScfType::Roks),
            "unknown" => Ok(ScfType::Unknown),
            _ => Err(ParseScfTypeError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GaussianSet {
    pub name: Option<String>,
    pub scf_type: ScfType,
}

impl GaussianSet {
    pub fn new(scf_type: ScfType) -> Self {
        Self {
            name: None,
            scf_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlaterSet {
    pub name: Option<String>,
    pub scf_type: ScfType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BasisSet {
    Gaussian(GaussianSet),
    Slater(SlaterSet),
}

impl BasisSet {
    pub fn scf_type(&self) -> ScfType {
        match self {
            BasisSet::Gaussian(set) => set.scf_type,
            BasisSet::Slater(set) => set.scf_type,
        }
    }

    pub fn as_gaussian(&self) -> Option<&GaussianSet> {
        match self {
            BasisSet::Gaussian(set) => Some(set),
            BasisSet::Slater(_) => None,
        }
    }
}

impl From<GaussianSet> for BasisSet {
    fn from(set: GaussianSet) -> Self {
        BasisSet::Gaussian(set)
    }
}

impl From<SlaterSet> for BasisSet {
    fn from(set: SlaterSet) -> Self {
        BasisSet::Slater(set)
    }
}
