//! Error types for building and loading documents

use crate::block::LayoutType;
use thiserror::Error;

/// Raised only when a document is built or loaded, never by edits or
/// compilation.
#[derive(Error, Debug)]
pub enum ConstructionError {
    #[error("Duplicate block id: {0}")]
    DuplicateId(String),

    #[error("Layout {id} ({layout_type}) needs {expected} columns, found {found}")]
    ColumnCount {
        id: String,
        layout_type: LayoutType,
        expected: usize,
        found: usize,
    },

    #[error("Malformed document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
