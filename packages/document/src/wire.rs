//! JSON shape of a block.
//!
//! Leaves and layouts share one flat object shape discriminated by `kind`;
//! [`RawBlock`] is that shape, and `Block` converts through it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::{Block, BlockKind, LayoutBlock, LayoutType, LeafBlock, Responsive, Styles};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBlock {
    #[error("layout block {id} is missing layoutType")]
    MissingLayoutType { id: String },

    #[error("layout block {id} cannot be placed inside a column of layout {parent}")]
    NestedLayout { id: String, parent: String },

    #[error("block {id}: {message}")]
    Kind { id: String, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBlock {
    id: String,
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    layout_type: Option<LayoutType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    columns: Option<Vec<Vec<RawBlock>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default)]
    styles: Styles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responsive: Option<Responsive>,
}

impl RawBlock {
    fn into_leaf(self) -> Result<LeafBlock, InvalidBlock> {
        let kind: BlockKind = self.kind.parse().map_err(|e| InvalidBlock::Kind {
            id: self.id.clone(),
            message: format!("{}", e),
        })?;

        Ok(LeafBlock {
            id: self.id,
            kind,
            content: self.content.unwrap_or_default(),
            styles: self.styles,
            link: self.link,
            alt_text: self.alt_text,
            responsive: self.responsive,
        })
    }
}

impl TryFrom<RawBlock> for Block {
    type Error = InvalidBlock;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        if raw.kind != "layout" {
            return raw.into_leaf().map(Block::Leaf);
        }

        let layout_type = raw
            .layout_type
            .ok_or_else(|| InvalidBlock::MissingLayoutType { id: raw.id.clone() })?;

        let mut columns = Vec::new();
        for column in raw.columns.unwrap_or_default() {
            let mut leaves = Vec::with_capacity(column.len());
            for entry in column {
                if entry.kind == "layout" {
                    return Err(InvalidBlock::NestedLayout {
                        id: entry.id,
                        parent: raw.id,
                    });
                }
                leaves.push(entry.into_leaf()?);
            }
            columns.push(leaves);
        }

        Ok(Block::Layout(LayoutBlock {
            id: raw.id,
            layout_type,
            columns,
            styles: raw.styles,
        }))
    }
}

impl From<LeafBlock> for RawBlock {
    fn from(leaf: LeafBlock) -> Self {
        Self {
            id: leaf.id,
            kind: leaf.kind.as_str().to_string(),
            layout_type: None,
            columns: None,
            content: Some(leaf.content),
            styles: leaf.styles,
            link: leaf.link,
            alt_text: leaf.alt_text,
            responsive: leaf.responsive,
        }
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        match block {
            Block::Leaf(leaf) => leaf.into(),
            Block::Layout(layout) => Self {
                id: layout.id,
                kind: "layout".to_string(),
                layout_type: Some(layout.layout_type),
                columns: Some(
                    layout
                        .columns
                        .into_iter()
                        .map(|column| column.into_iter().map(RawBlock::from).collect())
                        .collect(),
                ),
                content: None,
                styles: layout.styles,
                link: None,
                alt_text: None,
                responsive: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_missing_optional_fields() {
        let block: Block = serde_json::from_value(json!({
            "id": "b1",
            "kind": "text"
        }))
        .unwrap();

        let leaf = block.as_leaf().unwrap();
        assert_eq!(leaf.kind, BlockKind::Text);
        assert_eq!(leaf.content, "");
        assert!(leaf.styles.is_empty());
    }

    #[test]
    fn test_layout_from_json() {
        let block: Block = serde_json::from_value(json!({
            "id": "l1",
            "kind": "layout",
            "layoutType": "two-column",
            "columns": [[{ "id": "b1", "kind": "button", "content": "Go", "link": "/go" }], []],
            "styles": {}
        }))
        .unwrap();

        let layout = block.as_layout().unwrap();
        assert_eq!(layout.layout_type, LayoutType::TwoColumn);
        assert_eq!(layout.columns[0][0].link.as_deref(), Some("/go"));
        assert!(layout.columns[1].is_empty());
    }

    #[test]
    fn test_nested_layout_rejected() {
        let result: Result<Block, _> = serde_json::from_value(json!({
            "id": "outer",
            "kind": "layout",
            "layoutType": "one-column",
            "columns": [[{ "id": "inner", "kind": "layout", "layoutType": "one-column", "columns": [[]] }]]
        }));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("inner"), "unexpected error: {}", err);
    }

    #[test]
    fn test_layout_without_type_rejected() {
        let result: Result<Block, _> = serde_json::from_value(json!({
            "id": "l1",
            "kind": "layout",
            "columns": [[]]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_styles_keep_order() {
        let block: Block = serde_json::from_str(
            r#"{"id":"b1","kind":"text","content":"x","styles":{"padding":"4px","color":"red","fontSize":"12px"}}"#,
        )
        .unwrap();

        let keys: Vec<&str> = block.styles().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["padding", "color", "fontSize"]);

        let out = serde_json::to_string(&block).unwrap();
        assert!(out.contains(r#""styles":{"padding":"4px","color":"red","fontSize":"12px"}"#));
    }

    #[test]
    fn test_layout_serializes_without_leaf_fields() {
        let block = Block::from(LayoutBlock::new("l1", LayoutType::OneColumn));
        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(value["kind"], "layout");
        assert_eq!(value["layoutType"], "one-column");
        assert!(value.get("content").is_none());
        assert_eq!(value["columns"], json!([[]]));
    }
}
