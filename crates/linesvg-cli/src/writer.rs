//! Writing rendered documents to disk

use std::fs;
use std::path::Path;

use linesvg_core::{
    error::{LinesvgError, Result},
    types::VectorDocument,
};

/// Write a document to `path`, creating or truncating the file
pub fn write_document(document: &VectorDocument, path: &Path) -> Result<()> {
    fs::write(path, document.as_bytes()).map_err(|source| LinesvgError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
