//! # Undo/Redo History
//!
//! Linear history of whole-document snapshots.
//!
//! ## Design
//!
//! - A snapshot of the document is recorded immediately before every
//!   structural mutation (add, remove, move, load)
//! - Undo swaps the current document with the newest snapshot and moves the
//!   current document onto the redo stack
//! - Redo is the mirror image
//! - Recording a new snapshot clears the redo stack
//! - Cosmetic edits (patches, style changes, selection) are not recorded
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new();
//! let mut doc = Document::empty();
//!
//! history.record(doc.clone());
//! doc.blocks_mut().push(divider);
//!
//! history.undo(&mut doc); // back to empty
//! history.redo(&mut doc); // divider again
//! ```

use std::collections::VecDeque;

use mailblock_document::Document;
use serde::{Deserialize, Serialize};

/// History tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryConfig {
    /// Maximum number of undo levels (0 = unlimited)
    pub max_levels: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_levels: 100 }
    }
}

/// Snapshot stacks for undo/redo
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Snapshots before each recorded mutation (most recent last)
    past: VecDeque<Document>,

    /// Snapshots displaced by undo (most recent last)
    future: Vec<Document>,

    config: HistoryConfig,
}

impl History {
    /// Create a history with default max levels (100)
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            config,
        }
    }

    /// Record the state before a structural mutation
    pub fn record(&mut self, snapshot: Document) {
        self.past.push_back(snapshot);

        // Trim if exceeded max levels
        if self.config.max_levels > 0 && self.past.len() > self.config.max_levels {
            self.past.pop_front();
        }

        // New action invalidates future
        self.future.clear();
    }

    /// Restore the newest snapshot into `current`
    pub fn undo(&mut self, current: &mut Document) -> bool {
        match self.past.pop_back() {
            Some(previous) => {
                let displaced = std::mem::replace(current, previous);
                self.future.push(displaced);
                true
            }
            None => false,
        }
    }

    /// Reapply the most recently undone state into `current`
    pub fn redo(&mut self, current: &mut Document) -> bool {
        match self.future.pop() {
            Some(next) => {
                let displaced = std::mem::replace(current, next);
                self.past.push_back(displaced);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn past(&self) -> &VecDeque<Document> {
        &self.past
    }

    pub fn future(&self) -> &[Document] {
        &self.future
    }

    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblock_document::{Block, BlockKind, LeafBlock};

    fn doc_with(ids: &[&str]) -> Document {
        let blocks: Vec<Block> = ids
            .iter()
            .map(|id| LeafBlock::new(*id, BlockKind::Divider).into())
            .collect();
        Document::new(blocks).unwrap()
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.config().max_levels, 100);
    }

    #[test]
    fn test_record_undo_redo() {
        let mut history = History::new();
        let mut doc = doc_with(&[]);

        history.record(doc.clone());
        doc = doc_with(&["a"]);

        assert!(history.undo(&mut doc));
        assert!(doc.is_empty());
        assert_eq!(history.redo_levels(), 1);

        assert!(history.redo(&mut doc));
        assert_eq!(doc.ids(), vec!["a"]);
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_undo_redo_at_stack_ends() {
        let mut history = History::new();
        let mut doc = doc_with(&["a"]);

        assert!(!history.undo(&mut doc));
        assert!(!history.redo(&mut doc));
        assert_eq!(doc.ids(), vec!["a"]);
    }

    #[test]
    fn test_record_clears_future() {
        let mut history = History::new();
        let mut doc = doc_with(&[]);

        history.record(doc.clone());
        doc = doc_with(&["a"]);
        history.undo(&mut doc);
        assert!(history.can_redo());

        history.record(doc.clone());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = History::with_config(HistoryConfig { max_levels: 2 });

        for i in 0..3 {
            let id = format!("b{}", i);
            history.record(doc_with(&[id.as_str()]));
        }

        assert_eq!(history.undo_levels(), 2);
        // Oldest snapshot was dropped
        assert_eq!(history.past()[0].ids(), vec!["b1"]);
    }

    #[test]
    fn test_undo_after_trimming_walks_newest_first() {
        let mut history = History::with_config(HistoryConfig { max_levels: 3 });
        let mut doc = Document::empty();

        for i in 0..10 {
            history.record(doc.clone());
            let id = format!("b{}", i);
            doc = doc_with(&[id.as_str()]);
        }
        assert_eq!(history.undo_levels(), 3);

        let mut seen = Vec::new();
        while history.undo(&mut doc) {
            seen.push(doc.ids().concat());
        }
        assert_eq!(seen, vec!["b8", "b7", "b6"]);
        assert_eq!(history.redo_levels(), 3);

        assert!(history.redo(&mut doc));
        assert_eq!(doc.ids(), vec!["b7"]);
        assert_eq!(history.past().back().map(|d| d.ids().concat()), Some("b6".to_string()));
    }

    #[test]
    fn test_unlimited_levels() {
        let mut history = History::with_config(HistoryConfig { max_levels: 0 });
        for _ in 0..250 {
            history.record(Document::empty());
        }
        assert_eq!(history.undo_levels(), 250);
    }
}
