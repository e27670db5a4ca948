use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Malformed,
    NotThisFormat,
    Schema,
    Consistency,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("error parsing JSON: {details} (at line {line}, column {column})")]
    Parse {
        line: usize,
        column: usize,
        details: String,
    },

    #[error("input is not a JSON object")]
    NotAnObject,

    #[error("no \"chemical json\" key found")]
    MissingMarker,

    #[error("invalid unit cell specification: a, b, c, alpha, beta, gamma must be present and numeric")]
    InvalidUnitCell,

    #[error("no \"{0}\" key found")]
    MissingKey(&'static str),

    #[error("\"{key}\" is not of type {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("number of elements != number of {key} entries (expected {expected}, found {found})")]
    CountMismatch {
        key: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("cannot interpret fractional coordinates without unit cell")]
    FractionalWithoutCell,

    #[error("unit cell is degenerate; fractional coordinates cannot be converted")]
    DegenerateUnitCell,

    #[error("\"bonds.connections.index\" must hold atom index pairs, found {0} entries")]
    OddConnectionCount(usize),

    #[error("bond {bond} references atom {atom} outside the {atom_count} atoms read")]
    BondAtomOutOfRange {
        bond: usize,
        atom: i64,
        atom_count: usize,
    },

    #[error("number of bonds != number of bond orders ({bonds} bonds, {orders} orders)")]
    BondOrderCountMismatch { bonds: usize, orders: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::Parse { .. } => ErrorKind::Malformed,
            Error::NotAnObject | Error::MissingMarker => ErrorKind::NotThisFormat,
            Error::InvalidUnitCell | Error::MissingKey(_) | Error::WrongType { .. } => {
                ErrorKind::Schema
            }
            Error::CountMismatch { .. }
            | Error::FractionalWithoutCell
            | Error::DegenerateUnitCell
            | Error::OddConnectionCount(_)
            | Error::BondAtomOutOfRange { .. }
            | Error::BondOrderCountMismatch { .. } => ErrorKind::Consistency,
        }
    }

    pub(crate) fn wrong_type(key: &'static str, expected: &'static str) -> Self {
        Self::WrongType { key, expected }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Error::Io {
                source: std::io::Error::from(e),
            };
        }
        let details = e.to_string();
        // serde_json appends its own " at line L column C"; keep the bare message.
        let details = match details.rfind(" at line ") {
            Some(idx) => details[..idx].to_string(),
            None => details,
        };
        Error::Parse {
            line: e.line(),
            column: e.column(),
            details,
        }
    }
}
