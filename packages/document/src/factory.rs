//! Block factory: fresh ids plus per-kind defaults.

use crate::block::{Block, BlockKind, BlockTemplate, LayoutBlock, LayoutType, LeafBlock};
use crate::id_generator::IDGenerator;

/// Creates blocks with fresh ids and creation defaults.
#[derive(Debug, Clone, Default)]
pub struct BlockFactory {
    ids: IDGenerator,
}

impl BlockFactory {
    pub fn new(session: &str) -> Self {
        Self {
            ids: IDGenerator::new(session),
        }
    }

    pub fn with_generator(ids: IDGenerator) -> Self {
        Self { ids }
    }

    pub fn create_block(&mut self, kind: BlockKind) -> LeafBlock {
        LeafBlock::new(self.ids.new_id(), kind)
    }

    pub fn create_layout(&mut self, layout_type: LayoutType) -> LayoutBlock {
        LayoutBlock::new(self.ids.new_id(), layout_type)
    }

    pub fn create(&mut self, template: &BlockTemplate) -> Block {
        let id = self.ids.new_id();
        Self::create_with_id(id, template)
    }

    /// Like [`BlockFactory::create`], skipping ids that `in_use` claims.
    pub fn create_excluding(
        &mut self,
        template: &BlockTemplate,
        in_use: impl Fn(&str) -> bool,
    ) -> Block {
        let id = self.fresh_id(in_use);
        Self::create_with_id(id, template)
    }

    /// A block with creation defaults and the given id.
    pub fn create_with_id(id: impl Into<String>, template: &BlockTemplate) -> Block {
        match template {
            BlockTemplate::Leaf(kind) => LeafBlock::new(id, kind.clone()).into(),
            BlockTemplate::Layout(layout_type) => LayoutBlock::new(id, *layout_type).into(),
        }
    }

    /// Next id that `in_use` does not claim.
    pub fn fresh_id(&mut self, in_use: impl Fn(&str) -> bool) -> String {
        self.ids.new_id_excluding(in_use)
    }

    pub fn ids(&self) -> &IDGenerator {
        &self.ids
    }
}
