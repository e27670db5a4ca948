pub mod cjson;
pub mod error;

pub use cjson::{
    CjsonFormat, FILE_EXTENSIONS, MIME_TYPES, WriteOptions, read, read_document, read_into,
    to_document, write,
};
pub use error::{Error, ErrorKind};

use std::path::Path;

pub fn is_cjson_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FILE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
