pub mod compile;
pub mod init;
pub mod package;
pub mod validate;

pub use compile::{compile, CompileArgs};
pub use init::{init, InitArgs};
pub use package::{package, PackageArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use mailblock_document::Document;
use std::path::Path;

/// Read and validate a document file.
pub(crate) fn read_document(path: &Path) -> Result<Document> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    mailblock_document::deserialize(&json)
        .with_context(|| format!("Invalid document {}", path.display()))
}
