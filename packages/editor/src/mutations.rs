//! # Builder Mutations
//!
//! Serializable form of every builder operation, so a host can drive the
//! editor with JSON commands (from a UI bridge, a replay log, a test
//! fixture).
//!
//! ```json
//! {"type": "addToLayout", "layoutId": "a1b2-3", "columnIndex": 0, "kind": "button"}
//! ```
//!
//! Applying a mutation never fails. A mutation that addresses something
//! missing yields [`MutationResult::Noop`].

use mailblock_document::{BlockKind, BlockPatch, BlockTemplate, Document};
use serde::{Deserialize, Serialize};

use crate::builder::Builder;

/// Semantic builder operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Append a new block
    AddBlock { template: BlockTemplate },

    /// Insert a new block at a clamped index
    InsertBlock { template: BlockTemplate, index: isize },

    /// Shallow-merge a patch into a block anywhere in the tree
    UpdateBlock { id: String, patch: BlockPatch },

    /// Remove a top-level block
    RemoveBlock { id: String },

    /// Append a new leaf to a layout column
    AddToLayout {
        layout_id: String,
        column_index: usize,
        kind: BlockKind,
    },

    RemoveFromLayout {
        layout_id: String,
        column_index: usize,
        block_id: String,
    },

    UpdateInLayout {
        layout_id: String,
        column_index: usize,
        block_id: String,
        patch: BlockPatch,
    },

    /// Reorder the top level
    MoveBlock { from_index: isize, to_index: isize },

    DuplicateBlock { id: String },

    SetStyle {
        id: String,
        property: String,
        value: String,
    },

    RemoveStyle { id: String, property: String },

    Select { id: String },

    ClearSelection,

    Undo,

    Redo,

    /// Replace the whole document (undoable)
    Load { document: Document },

    /// Back to the empty initial state
    Reset,
}

/// Outcome of applying a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MutationResult {
    Applied {
        version: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        created_id: Option<String>,
    },
    Noop,
}

impl MutationResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationResult::Applied { .. })
    }

    pub fn created_id(&self) -> Option<&str> {
        match self {
            MutationResult::Applied { created_id, .. } => created_id.as_deref(),
            MutationResult::Noop => None,
        }
    }
}

impl Mutation {
    /// Whether applying this mutation records an undo snapshot
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Mutation::AddBlock { .. }
                | Mutation::InsertBlock { .. }
                | Mutation::RemoveBlock { .. }
                | Mutation::AddToLayout { .. }
                | Mutation::RemoveFromLayout { .. }
                | Mutation::MoveBlock { .. }
                | Mutation::DuplicateBlock { .. }
                | Mutation::Load { .. }
        )
    }

    /// Apply this mutation to a builder
    pub fn apply(self, builder: &mut Builder) -> MutationResult {
        match self {
            Mutation::AddBlock { template } => {
                let id = builder.add_block(template);
                created(builder, Some(id))
            }

            Mutation::InsertBlock { template, index } => {
                let id = builder.insert_block(template, index);
                created(builder, Some(id))
            }

            Mutation::UpdateBlock { id, patch } => {
                let applied = builder.update_block(&id, &patch);
                changed(builder, applied)
            }

            Mutation::RemoveBlock { id } => {
                let applied = builder.remove_block(&id);
                changed(builder, applied)
            }

            Mutation::AddToLayout {
                layout_id,
                column_index,
                kind,
            } => {
                let id = builder.add_to_layout(&layout_id, column_index, kind);
                created(builder, id)
            }

            Mutation::RemoveFromLayout {
                layout_id,
                column_index,
                block_id,
            } => {
                let applied = builder.remove_from_layout(&layout_id, column_index, &block_id);
                changed(builder, applied)
            }

            Mutation::UpdateInLayout {
                layout_id,
                column_index,
                block_id,
                patch,
            } => {
                let applied = builder.update_in_layout(&layout_id, column_index, &block_id, &patch);
                changed(builder, applied)
            }

            Mutation::MoveBlock {
                from_index,
                to_index,
            } => {
                let applied = builder.move_block(from_index, to_index);
                changed(builder, applied)
            }

            Mutation::DuplicateBlock { id } => {
                let id = builder.duplicate_block(&id);
                created(builder, id)
            }

            Mutation::SetStyle {
                id,
                property,
                value,
            } => {
                let applied = builder.set_style(&id, &property, &value);
                changed(builder, applied)
            }

            Mutation::RemoveStyle { id, property } => {
                let applied = builder.remove_style(&id, &property);
                changed(builder, applied)
            }

            Mutation::Select { id } => {
                let applied = builder.select(&id);
                changed(builder, applied)
            }

            Mutation::ClearSelection => {
                builder.clear_selection();
                changed(builder, true)
            }

            Mutation::Undo => {
                let applied = builder.undo();
                changed(builder, applied)
            }

            Mutation::Redo => {
                let applied = builder.redo();
                changed(builder, applied)
            }

            Mutation::Load { document } => {
                builder.load_document(document);
                changed(builder, true)
            }

            Mutation::Reset => {
                builder.reset();
                changed(builder, true)
            }
        }
    }
}

fn created(builder: &Builder, id: Option<String>) -> MutationResult {
    match id {
        Some(id) => MutationResult::Applied {
            version: builder.version(),
            created_id: Some(id),
        },
        None => MutationResult::Noop,
    }
}

fn changed(builder: &Builder, applied: bool) -> MutationResult {
    if applied {
        MutationResult::Applied {
            version: builder.version(),
            created_id: None,
        }
    } else {
        MutationResult::Noop
    }
}

impl Builder {
    /// Apply a serialized mutation
    pub fn apply(&mut self, mutation: Mutation) -> MutationResult {
        mutation.apply(self)
    }
}
