//! # Document
//!
//! The email body: an ordered sequence of top-level blocks.
//!
//! A `Document` built through [`Document::new`] or deserialized from JSON is
//! validated:
//! - every id is unique across the top level and all layout columns
//! - every layout has at least as many columns as its `layoutType` requires
//!
//! Lookups search the top level first, then every column of every layout.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockPatch, LayoutBlock, LeafBlock, Styles};
use crate::error::ConstructionError;

/// Validated, ordered sequence of top-level blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Block>", into = "Vec<Block>")]
pub struct Document {
    blocks: Vec<Block>,
}

/// Shared reference to a block found anywhere in the tree
#[derive(Debug, Clone, Copy)]
pub enum BlockRef<'a> {
    Top(&'a Block),
    Nested(&'a LeafBlock),
}

impl<'a> BlockRef<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            BlockRef::Top(block) => block.id(),
            BlockRef::Nested(leaf) => &leaf.id,
        }
    }

    pub fn styles(&self) -> &'a Styles {
        match *self {
            BlockRef::Top(block) => block.styles(),
            BlockRef::Nested(leaf) => &leaf.styles,
        }
    }

    pub fn as_leaf(&self) -> Option<&'a LeafBlock> {
        match *self {
            BlockRef::Top(block) => block.as_leaf(),
            BlockRef::Nested(leaf) => Some(leaf),
        }
    }
}

/// Mutable reference to a block found anywhere in the tree
#[derive(Debug)]
pub enum BlockMut<'a> {
    Top(&'a mut Block),
    Nested(&'a mut LeafBlock),
}

impl<'a> BlockMut<'a> {
    pub fn apply(self, patch: &BlockPatch) {
        match self {
            BlockMut::Top(block) => patch.apply_to(block),
            BlockMut::Nested(leaf) => patch.apply_to_leaf(leaf),
        }
    }

    pub fn styles_mut(self) -> &'a mut Styles {
        match self {
            BlockMut::Top(block) => block.styles_mut(),
            BlockMut::Nested(leaf) => &mut leaf.styles,
        }
    }
}

impl Document {
    /// Build a validated document.
    pub fn new(blocks: Vec<Block>) -> Result<Self, ConstructionError> {
        let doc = Self { blocks };
        doc.validate()?;
        Ok(doc)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Check id uniqueness and layout column counts.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        let mut seen = HashSet::new();

        for block in &self.blocks {
            if let Block::Layout(layout) = block {
                let expected = layout.layout_type.column_count();
                if layout.columns.len() < expected {
                    tracing::debug!(
                        "layout {} has {} of {} columns",
                        layout.id,
                        layout.columns.len(),
                        expected
                    );
                    return Err(ConstructionError::ColumnCount {
                        id: layout.id.clone(),
                        layout_type: layout.layout_type,
                        expected,
                        found: layout.columns.len(),
                    });
                }
            }

            for id in block.ids() {
                if !seen.insert(id) {
                    tracing::debug!("duplicate block id {}", id);
                    return Err(ConstructionError::DuplicateId(id.to_string()));
                }
            }
        }

        Ok(())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Raw access for the edit engine. Callers must keep ids unique and
    /// must not drop layout columns below their required count.
    pub fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Top-level position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    pub fn find(&self, id: &str) -> Option<BlockRef<'_>> {
        if let Some(block) = self.blocks.iter().find(|block| block.id() == id) {
            return Some(BlockRef::Top(block));
        }

        self.layouts()
            .flat_map(|layout| layout.leaves())
            .find(|leaf| leaf.id == id)
            .map(BlockRef::Nested)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<BlockMut<'_>> {
        if let Some(index) = self.position(id) {
            return Some(BlockMut::Top(&mut self.blocks[index]));
        }

        for block in &mut self.blocks {
            if let Block::Layout(layout) = block {
                for column in &mut layout.columns {
                    if let Some(leaf) = column.iter_mut().find(|leaf| leaf.id == id) {
                        return Some(BlockMut::Nested(leaf));
                    }
                }
            }
        }

        None
    }

    /// Top-level layout with `id`.
    pub fn layout(&self, id: &str) -> Option<&LayoutBlock> {
        self.layouts().find(|layout| layout.id == id)
    }

    pub fn layout_mut(&mut self, id: &str) -> Option<&mut LayoutBlock> {
        self.blocks
            .iter_mut()
            .filter_map(Block::as_layout_mut)
            .find(|layout| layout.id == id)
    }

    pub fn layouts(&self) -> impl Iterator<Item = &LayoutBlock> {
        self.blocks.iter().filter_map(Block::as_layout)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Every id in document order: each top-level block followed by its
    /// nested leaves.
    pub fn ids(&self) -> Vec<&str> {
        self.blocks.iter().flat_map(Block::ids).collect()
    }

    /// Number of blocks in the whole tree, layouts included.
    pub fn block_count(&self) -> usize {
        self.blocks.iter().map(|block| block.ids().len()).sum()
    }
}

impl TryFrom<Vec<Block>> for Document {
    type Error = ConstructionError;

    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        Document::new(blocks)
    }
}

impl From<Document> for Vec<Block> {
    fn from(doc: Document) -> Self {
        doc.blocks
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockKind, LayoutType};

    fn text(id: &str) -> LeafBlock {
        LeafBlock::new(id, BlockKind::Text)
    }

    fn two_column(id: &str, left: Vec<LeafBlock>, right: Vec<LeafBlock>) -> Block {
        let mut layout = LayoutBlock::new(id, LayoutType::TwoColumn);
        layout.columns = vec![left, right];
        layout.into()
    }

    #[test]
    fn test_duplicate_top_level_id_rejected() {
        let result = Document::new(vec![text("a").into(), text("a").into()]);
        assert!(matches!(result, Err(ConstructionError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_duplicate_across_scopes_rejected() {
        let result = Document::new(vec![
            text("a").into(),
            two_column("l1", vec![text("a")], vec![]),
        ]);
        assert!(matches!(result, Err(ConstructionError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_missing_columns_rejected() {
        let mut layout = LayoutBlock::new("l1", LayoutType::ThreeColumn);
        layout.columns.truncate(1);

        let result = Document::new(vec![layout.into()]);
        assert!(matches!(
            result,
            Err(ConstructionError::ColumnCount { expected: 3, found: 1, .. })
        ));
    }

    #[test]
    fn test_extra_columns_allowed() {
        let mut layout = LayoutBlock::new("l1", LayoutType::OneColumn);
        layout.column_mut_or_grow(2).unwrap();
        assert!(Document::new(vec![layout.into()]).is_ok());
    }

    #[test]
    fn test_find_searches_top_level_then_columns() {
        let doc = Document::new(vec![
            text("a").into(),
            two_column("l1", vec![text("b")], vec![text("c")]),
        ])
        .unwrap();

        assert!(matches!(doc.find("a"), Some(BlockRef::Top(_))));
        assert!(matches!(doc.find("l1"), Some(BlockRef::Top(_))));
        assert!(matches!(doc.find("c"), Some(BlockRef::Nested(_))));
        assert!(doc.find("zzz").is_none());
    }

    #[test]
    fn test_find_mut_patches_nested_leaf() {
        let mut doc = Document::new(vec![two_column("l1", vec![text("b")], vec![])]).unwrap();

        doc.find_mut("b").unwrap().apply(&BlockPatch::content("patched"));

        let leaf = doc.find("b").and_then(|found| found.as_leaf()).unwrap();
        assert_eq!(leaf.content, "patched");
    }

    #[test]
    fn test_ids_and_counts() {
        let doc = Document::new(vec![
            text("a").into(),
            two_column("l1", vec![text("b")], vec![text("c")]),
        ])
        .unwrap();

        assert_eq!(doc.ids(), vec!["a", "l1", "b", "c"]);
        assert_eq!(doc.block_count(), 4);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.position("l1"), Some(1));
        assert!(doc.contains_id("c"));
    }
}
