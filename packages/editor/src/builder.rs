//! # Builder State
//!
//! The editing state of one composition: the current document, the selected
//! block and the undo/redo history.
//!
//! Every operation is total. Addressing a block, layout or column that does
//! not exist has no effect and reports `false`/`None`; nothing here returns
//! an error or panics.
//!
//! ## History policy
//!
//! | operation                                   | records history |
//! |---------------------------------------------|-----------------|
//! | add / insert / duplicate / add to layout    | yes             |
//! | remove / remove from layout                 | yes             |
//! | move                                        | yes             |
//! | load                                        | yes             |
//! | update / update in layout / set style       | no              |
//! | select                                      | no              |
//! | reset / restore                             | clears history  |

use mailblock_document::{
    Block, BlockFactory, BlockKind, BlockPatch, BlockRef, BlockTemplate, Document, LayoutBlock,
    LeafBlock,
};
use tracing::{debug, info};

use crate::history::{History, HistoryConfig};

/// Editing state for one email composition
#[derive(Debug, Clone)]
pub struct Builder {
    document: Document,
    selected_id: Option<String>,
    history: History,
    factory: BlockFactory,
    /// Increments on every effective change
    version: u64,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new("default")
    }
}

/// Clamp an insertion index into `0..=len`.
fn clamp_insert(index: isize, len: usize) -> usize {
    usize::try_from(index).map_or(0, |index| index.min(len))
}

/// Clamp a position into `0..len` (`len` must be non-zero).
fn clamp_position(index: isize, len: usize) -> usize {
    usize::try_from(index).map_or(0, |index| index.min(len - 1))
}

impl Builder {
    /// Empty builder whose new block ids are seeded from `session`
    pub fn new(session: &str) -> Self {
        Self::with_config(session, HistoryConfig::default())
    }

    pub fn with_config(session: &str, config: HistoryConfig) -> Self {
        Self {
            document: Document::empty(),
            selected_id: None,
            history: History::with_config(config),
            factory: BlockFactory::new(session),
            version: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The selected block, looked up fresh so it always reflects patches
    pub fn selected_block(&self) -> Option<BlockRef<'_>> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.document.find(id))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    fn fresh_id(&mut self) -> String {
        let document = &self.document;
        self.factory.fresh_id(|id| document.contains_id(id))
    }

    fn create(&mut self, template: &BlockTemplate) -> Block {
        let document = &self.document;
        self.factory
            .create_excluding(template, |id| document.contains_id(id))
    }

    fn record(&mut self) {
        self.history.record(self.document.clone());
        self.version += 1;
    }

    /// Append a new block to the end of the document and select it
    pub fn add_block(&mut self, template: impl Into<BlockTemplate>) -> String {
        let index = self.document.len();
        self.insert_at(template.into(), index)
    }

    /// Insert a new block at `index`, clamped to `0..=len`, and select it
    pub fn insert_block(&mut self, template: impl Into<BlockTemplate>, index: isize) -> String {
        let index = clamp_insert(index, self.document.len());
        self.insert_at(template.into(), index)
    }

    fn insert_at(&mut self, template: BlockTemplate, index: usize) -> String {
        let block = self.create(&template);
        let id = block.id().to_string();

        self.record();
        self.document.blocks_mut().insert(index, block);
        self.selected_id = Some(id.clone());

        debug!("inserted {} block {} at {}", template_name(&template), id, index);
        id
    }

    /// Append a new leaf to column `column_index` of top-level layout
    /// `layout_id`. Missing columns up to `column_index` are created empty,
    /// up to [`LayoutBlock::MAX_COLUMNS`]; indices past that are a no-op.
    pub fn add_to_layout(
        &mut self,
        layout_id: &str,
        column_index: usize,
        kind: BlockKind,
    ) -> Option<String> {
        let Some(layout) = self.document.layout(layout_id) else {
            debug!("add_to_layout: no top-level layout {}", layout_id);
            return None;
        };
        if column_index >= layout.columns.len() && column_index >= LayoutBlock::MAX_COLUMNS {
            debug!(
                "add_to_layout: column {} past the {} column limit",
                column_index,
                LayoutBlock::MAX_COLUMNS
            );
            return None;
        }

        let id = self.fresh_id();
        let leaf = LeafBlock::new(id.clone(), kind);

        self.record();
        self.document
            .layout_mut(layout_id)
            .and_then(|layout| layout.column_mut_or_grow(column_index))?
            .push(leaf);
        self.selected_id = Some(id.clone());

        debug!("added {} to {}[{}]", id, layout_id, column_index);
        Some(id)
    }

    /// Copy a top-level block (fresh ids throughout) right after the original
    pub fn duplicate_block(&mut self, id: &str) -> Option<String> {
        let Some(index) = self.document.position(id) else {
            debug!("duplicate_block: no top-level block {}", id);
            return None;
        };

        let mut copy = self.document.blocks()[index].clone();
        match &mut copy {
            Block::Leaf(leaf) => leaf.id = self.fresh_id(),
            Block::Layout(layout) => {
                layout.id = self.fresh_id();
                for leaf in layout.columns.iter_mut().flatten() {
                    leaf.id = self.fresh_id();
                }
            }
        }

        let copy_id = copy.id().to_string();
        self.record();
        self.document.blocks_mut().insert(index + 1, copy);
        self.selected_id = Some(copy_id.clone());
        Some(copy_id)
    }

    // =========================================================================
    // Patching (no history)
    // =========================================================================

    /// Shallow-merge `patch` into the first block with `id`, searching the
    /// top level and then every layout column
    pub fn update_block(&mut self, id: &str, patch: &BlockPatch) -> bool {
        match self.document.find_mut(id) {
            Some(found) => {
                found.apply(patch);
                self.version += 1;
                true
            }
            None => {
                debug!("update_block: no block {}", id);
                false
            }
        }
    }

    /// Like [`Builder::update_block`], scoped to one layout column
    pub fn update_in_layout(
        &mut self,
        layout_id: &str,
        column_index: usize,
        block_id: &str,
        patch: &BlockPatch,
    ) -> bool {
        let leaf = self
            .document
            .layout_mut(layout_id)
            .and_then(|layout| layout.columns.get_mut(column_index))
            .and_then(|column| column.iter_mut().find(|leaf| leaf.id == block_id));

        match leaf {
            Some(leaf) => {
                patch.apply_to_leaf(leaf);
                self.version += 1;
                true
            }
            None => {
                debug!(
                    "update_in_layout: {} not in {}[{}]",
                    block_id, layout_id, column_index
                );
                false
            }
        }
    }

    /// Set a single style property on any block in the tree
    pub fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool {
        let Some(found) = self.document.find_mut(id) else {
            debug!("set_style: no block {}", id);
            return false;
        };

        found
            .styles_mut()
            .insert(property.to_string(), value.to_string());
        self.version += 1;
        true
    }

    /// Remove a single style property, keeping the order of the rest
    pub fn remove_style(&mut self, id: &str, property: &str) -> bool {
        let removed = self
            .document
            .find_mut(id)
            .and_then(|found| found.styles_mut().shift_remove(property))
            .is_some();

        if removed {
            self.version += 1;
        }
        removed
    }

    // =========================================================================
    // Removal and reordering
    // =========================================================================

    /// Remove a top-level block. Blocks inside layouts are not matched; use
    /// [`Builder::remove_from_layout`] for those.
    pub fn remove_block(&mut self, id: &str) -> bool {
        let Some(index) = self.document.position(id) else {
            debug!("remove_block: no top-level block {}", id);
            return false;
        };

        self.record();
        let removed = self.document.blocks_mut().remove(index);

        if let Some(selected) = &self.selected_id {
            if removed.ids().contains(&selected.as_str()) {
                self.selected_id = None;
            }
        }
        true
    }

    pub fn remove_from_layout(&mut self, layout_id: &str, column_index: usize, block_id: &str) -> bool {
        let position = self
            .document
            .layout(layout_id)
            .and_then(|layout| layout.column(column_index))
            .and_then(|column| column.iter().position(|leaf| leaf.id == block_id));

        let Some(position) = position else {
            debug!(
                "remove_from_layout: {} not in {}[{}]",
                block_id, layout_id, column_index
            );
            return false;
        };

        self.record();
        if let Some(column) = self
            .document
            .layout_mut(layout_id)
            .and_then(|layout| layout.columns.get_mut(column_index))
        {
            column.remove(position);
        }

        if self.selected_id.as_deref() == Some(block_id) {
            self.selected_id = None;
        }
        true
    }

    /// Move a top-level block; both indices are clamped into range
    pub fn move_block(&mut self, from_index: isize, to_index: isize) -> bool {
        let len = self.document.len();
        if len == 0 {
            return false;
        }

        let from = clamp_position(from_index, len);
        let to = clamp_position(to_index, len);
        if from == to {
            return false;
        }

        self.record();
        let blocks = self.document.blocks_mut();
        let block = blocks.remove(from);
        blocks.insert(to, block);
        true
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a block anywhere in the tree; unknown ids are ignored
    pub fn select(&mut self, id: &str) -> bool {
        if !self.document.contains_id(id) {
            return false;
        }
        self.selected_id = Some(id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = &self.selected_id {
            if !self.document.contains_id(id) {
                self.selected_id = None;
            }
        }
    }

    // =========================================================================
    // History and whole-document replacement
    // =========================================================================

    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.document) {
            return false;
        }
        self.version += 1;
        self.drop_stale_selection();
        debug!("undo ({} levels left)", self.history.undo_levels());
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.document) {
            return false;
        }
        self.version += 1;
        self.drop_stale_selection();
        debug!("redo ({} levels left)", self.history.redo_levels());
        true
    }

    /// Replace the whole document, keeping the previous one undoable
    pub fn load_document(&mut self, document: Document) {
        info!("loading document with {} blocks", document.block_count());
        self.record();
        self.document = document;
        self.selected_id = None;
    }

    /// Replace the whole document and start a fresh history, as on startup
    pub fn restore(&mut self, document: Document) {
        info!("restoring document with {} blocks", document.block_count());
        self.document = document;
        self.selected_id = None;
        self.history.clear();
        self.version += 1;
    }

    /// Back to the empty initial state
    pub fn reset(&mut self) {
        info!("resetting builder");
        self.restore(Document::empty());
    }
}

fn template_name(template: &BlockTemplate) -> &str {
    match template {
        BlockTemplate::Leaf(kind) => kind.as_str(),
        BlockTemplate::Layout(layout_type) => layout_type.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblock_document::LayoutType;

    #[test]
    fn test_clamp_insert() {
        assert_eq!(clamp_insert(-3, 2), 0);
        assert_eq!(clamp_insert(1, 2), 1);
        assert_eq!(clamp_insert(9, 2), 2);
    }

    #[test]
    fn test_clamp_position() {
        assert_eq!(clamp_position(-1, 3), 0);
        assert_eq!(clamp_position(7, 3), 2);
    }

    #[test]
    fn test_add_block_selects_and_records() {
        let mut builder = Builder::new("test");
        let id = builder.add_block(BlockKind::Text);

        assert_eq!(builder.document().ids(), vec![id.as_str()]);
        assert_eq!(builder.selected_id(), Some(id.as_str()));
        assert_eq!(builder.history().undo_levels(), 1);
    }

    #[test]
    fn test_add_layout_block() {
        let mut builder = Builder::new("test");
        let id = builder.add_block(LayoutType::FourColumn);

        let layout = builder.document().layout(&id).unwrap();
        assert_eq!(layout.columns.len(), 4);
    }

    #[test]
    fn test_fresh_ids_skip_loaded_ids() {
        let mut builder = Builder::new("test");
        let first = builder.add_block(BlockKind::Text);

        // A second builder with the same session would hand out `first` again
        let mut other = Builder::new("test");
        other.restore(builder.document().clone());
        let second = other.add_block(BlockKind::Text);

        assert_ne!(first, second);
    }

    #[test]
    fn test_update_does_not_record_history() {
        let mut builder = Builder::new("test");
        let id = builder.add_block(BlockKind::Text);

        assert!(builder.update_block(&id, &BlockPatch::content("Hello")));
        assert_eq!(builder.history().undo_levels(), 1);

        let leaf = builder.selected_block().and_then(|b| b.as_leaf()).unwrap();
        assert_eq!(leaf.content, "Hello");
    }

    #[test]
    fn test_remove_layout_clears_nested_selection() {
        let mut builder = Builder::new("test");
        let layout = builder.add_block(LayoutType::TwoColumn);
        let nested = builder.add_to_layout(&layout, 1, BlockKind::Image).unwrap();
        assert_eq!(builder.selected_id(), Some(nested.as_str()));

        assert!(builder.remove_block(&layout));
        assert_eq!(builder.selected_id(), None);
    }

    #[test]
    fn test_duplicate_layout_gets_fresh_ids() {
        let mut builder = Builder::new("test");
        let layout = builder.add_block(LayoutType::TwoColumn);
        builder.add_to_layout(&layout, 0, BlockKind::Text).unwrap();

        let copy = builder.duplicate_block(&layout).unwrap();

        assert_eq!(builder.document().position(&copy), Some(1));
        let ids = builder.document().ids();
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(unique.len(), 4);
        assert!(builder.document().validate().is_ok());
    }

    #[test]
    fn test_set_and_remove_style() {
        let mut builder = Builder::new("test");
        let id = builder.add_block(BlockKind::Divider);

        assert!(builder.set_style(&id, "height", "2px"));
        assert!(builder.remove_style(&id, "margin"));
        assert!(!builder.remove_style(&id, "margin"));

        let styles = builder.document().find(&id).unwrap().styles();
        let keys: Vec<&str> = styles.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["height", "backgroundColor", "border"]);
        assert_eq!(styles["height"], "2px");
        assert_eq!(builder.history().undo_levels(), 1);
    }

    #[test]
    fn test_undo_drops_stale_selection() {
        let mut builder = Builder::new("test");
        let id = builder.add_block(BlockKind::Spacer);
        assert!(builder.undo());
        assert!(builder.document().find(&id).is_none());
        assert_eq!(builder.selected_id(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut builder = Builder::new("test");
        builder.add_block(BlockKind::Text);
        builder.add_block(BlockKind::Button);

        builder.reset();

        assert!(builder.document().is_empty());
        assert!(!builder.can_undo());
        assert!(!builder.can_redo());
        assert_eq!(builder.selected_id(), None);
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut builder = Builder::new("test");
        let id = builder.add_block(BlockKind::Text);
        assert!(!builder.select("missing"));
        assert_eq!(builder.selected_id(), Some(id.as_str()));
    }
}
