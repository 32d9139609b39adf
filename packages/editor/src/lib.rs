//! # Mailblock Editor
//!
//! Edit engine for email compositions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host UI: palette, drag-and-drop, inspector  │
//! └─────────────────────────────────────────────┘
//!                     ↓ Mutation / method calls
//! ┌─────────────────────────────────────────────┐
//! │ editor: Builder state                       │
//! │  - Create / patch / move / delete blocks    │
//! │  - Layout column operations                 │
//! │  - Snapshot undo/redo                       │
//! │  - Pluggable DocumentStore                  │
//! └─────────────────────────────────────────────┘
//!                     ↓ &Document
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: Document → email HTML        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Total operations**: addressing something missing is a no-op
//! 2. **Structural edits are undoable**: cosmetic edits are not
//! 3. **Ids stay globally unique**: new ids never collide with loaded ones
//! 4. **No global state**: persistence goes through an injected store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mailblock_editor::{Builder, BlockKind, LayoutType};
//!
//! let mut builder = Builder::new("newsletter");
//! let layout = builder.add_block(LayoutType::TwoColumn);
//! builder.add_to_layout(&layout, 0, BlockKind::Button);
//!
//! builder.undo();
//! builder.redo();
//!
//! let html = mailblock_compiler_html::compile(builder.document());
//! ```

mod builder;
mod errors;
mod history;
mod mutations;
mod storage;

pub use builder::Builder;
pub use errors::EditorError;
pub use history::{History, HistoryConfig};
pub use mutations::{Mutation, MutationResult};
pub use storage::{DocumentStore, FileStore, MemoryStore};

// Re-export document types for convenience
pub use mailblock_document::{
    Block, BlockKind, BlockPatch, BlockRef, BlockTemplate, Document, LayoutBlock, LayoutType,
    LeafBlock, Responsive, Styles,
};
