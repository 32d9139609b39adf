//! Persistence boundary: Document ⇄ JSON text.

use crate::block::Block;
use crate::document::Document;
use crate::error::ConstructionError;

/// Compact JSON array of blocks.
pub fn serialize(doc: &Document) -> Result<String, ConstructionError> {
    Ok(serde_json::to_string(doc.blocks())?)
}

pub fn serialize_pretty(doc: &Document) -> Result<String, ConstructionError> {
    Ok(serde_json::to_string_pretty(doc.blocks())?)
}

/// Parse and validate a JSON array of blocks.
pub fn deserialize(json: &str) -> Result<Document, ConstructionError> {
    let blocks: Vec<Block> = serde_json::from_str(json)?;
    Document::new(blocks)
}
