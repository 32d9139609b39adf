//! # Mailblock Document
//!
//! In-memory model of a composed email: an ordered sequence of content
//! blocks, some of which are layout blocks holding columns of leaf blocks.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: Block tree + factory + JSON       │
//! │  - Leaf / Layout sum type                   │
//! │  - Per-kind creation defaults               │
//! │  - Construction-time validation             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + undo/redo snapshots     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: Document → email HTML        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mailblock_document::{BlockFactory, BlockKind, Document, LayoutType};
//!
//! let mut factory = BlockFactory::new("newsletter");
//! let header = factory.create_block(BlockKind::Header);
//! let layout = factory.create_layout(LayoutType::TwoColumn);
//!
//! let doc = Document::new(vec![header.into(), layout.into()])?;
//! let json = mailblock_document::serialize(&doc)?;
//! ```

mod block;
mod defaults;
mod document;
mod error;
mod factory;
mod id_generator;
mod json;
mod wire;

pub use block::{
    Block, BlockKind, BlockPatch, BlockTemplate, LayoutBlock, LayoutType, LeafBlock,
    ParseKindError, Responsive, Styles,
};
pub use defaults::{default_alt_text, default_content, default_link, default_styles};
pub use document::{BlockMut, BlockRef, Document};
pub use error::ConstructionError;
pub use factory::BlockFactory;
pub use id_generator::{get_session_id, IDGenerator};
pub use json::{deserialize, serialize, serialize_pretty};
pub use wire::InvalidBlock;
