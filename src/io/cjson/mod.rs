mod access;
mod reader;
mod writer;

pub use reader::{read, read_document, read_into};
pub use writer::{to_document, write};

use super::error::Error;
use crate::model::system::Molecule;
use std::io::{Read, Write};

pub(crate) const MARKER_KEY: &str = "chemical json";
pub(crate) const NAME_KEY: &str = "name";
pub(crate) const INCHI_KEY: &str = "inchi";
pub(crate) const UNIT_CELL_KEY: &str = "unit cell";
pub(crate) const BASIS_SET_KEY: &str = "basisSet";
pub(crate) const GAUSSIAN_BASIS_TYPE: &str = "GTO";

pub const FILE_EXTENSIONS: &[&str] = &["cjson"];
pub const MIME_TYPES: &[&str] = &["chemical/x-cjson"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub indent: String,
}

impl WriteOptions {
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: String::from("  "),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CjsonFormat {
    options: WriteOptions,
    diagnostics: Vec<String>,
}

impl CjsonFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriteOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &'static str {
        "cjson"
    }

    pub fn name(&self) -> &'static str {
        "Chemical JSON"
    }

    pub fn file_extensions(&self) -> &'static [&'static str] {
        FILE_EXTENSIONS
    }

    pub fn mime_types(&self) -> &'static [&'static str] {
        MIME_TYPES
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    pub fn read<R: Read>(&mut self, reader: R, molecule: &mut Molecule) -> Result<(), Error> {
        let result = read_into(reader, molecule, &mut self.diagnostics);
        self.record(result)
    }

    pub fn read_str(&mut self, text: &str, molecule: &mut Molecule) -> Result<(), Error> {
        self.read(text.as_bytes(), molecule)
    }

    pub fn write<W: Write>(&mut self, molecule: &Molecule, writer: W) -> Result<(), Error> {
        let result = write(writer, molecule, &self.options);
        self.record(result)
    }

    pub fn write_string(&mut self, molecule: &Molecule) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.write(molecule, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn clear_diagnostics(&mut self) {
        self.diagnostics.clear();
    }

    fn record<T>(&mut self, result: Result<T, Error>) -> Result<T, Error> {
        if let Err(e) = &result {
            self.diagnostics.push(e.to_string());
        }
        result
    }
}
