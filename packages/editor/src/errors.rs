//! Error types for the editor

use mailblock_document::ConstructionError;
use thiserror::Error;

/// Edit operations never fail; these come from loading and persistence.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid document: {0}")]
    Construction(#[from] ConstructionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for EditorError {
    fn from(e: serde_json::Error) -> Self {
        EditorError::Construction(ConstructionError::Json(e))
    }
}
