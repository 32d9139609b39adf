//! # Document Storage
//!
//! Persistence is a host concern; the builder only knows this trait.
//!
//! - **Memory**: keeps the serialized JSON in memory (tests, previews)
//! - **File**: one JSON file on disk
//!
//! Hosts with other media (browser storage bridge, database) implement
//! [`DocumentStore`] themselves.

use std::path::{Path, PathBuf};

use mailblock_document::{deserialize, serialize_pretty, Document};
use tracing::info;

use crate::builder::Builder;
use crate::errors::EditorError;

/// Where a document is persisted between sessions
pub trait DocumentStore {
    /// The stored document, or `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<Document>, EditorError>;

    fn save(&mut self, document: &Document) -> Result<(), EditorError>;
}

/// In-memory store holding the serialized form
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    json: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with already-serialized JSON
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
        }
    }

    pub fn json(&self) -> Option<&str> {
        self.json.as_deref()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<Document>, EditorError> {
        self.json
            .as_deref()
            .map(deserialize)
            .transpose()
            .map_err(EditorError::from)
    }

    fn save(&mut self, document: &Document) -> Result<(), EditorError> {
        self.json = Some(serialize_pretty(document)?);
        Ok(())
    }
}

/// File-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Option<Document>, EditorError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let source = std::fs::read_to_string(&self.path)?;
        Ok(Some(deserialize(&source)?))
    }

    fn save(&mut self, document: &Document) -> Result<(), EditorError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serialize_pretty(document)?)?;
        info!("saved document to {}", self.path.display());
        Ok(())
    }
}

impl Builder {
    /// Persist the current document
    pub fn save_to(&self, store: &mut impl DocumentStore) -> Result<(), EditorError> {
        store.save(self.document())
    }

    /// Restore from a store as on startup. Returns `false` when the store is
    /// empty, leaving the builder untouched.
    pub fn load_from(&mut self, store: &impl DocumentStore) -> Result<bool, EditorError> {
        match store.load()? {
            Some(document) => {
                self.restore(document);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblock_document::BlockKind;

    #[test]
    fn test_memory_store_round_trip() {
        let mut builder = Builder::new("test");
        builder.add_block(BlockKind::Header);
        builder.add_block(BlockKind::Footer);

        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        builder.save_to(&mut store).unwrap();

        let mut restored = Builder::new("other");
        assert!(restored.load_from(&store).unwrap());
        assert_eq!(restored.document(), builder.document());
        assert!(!restored.can_undo());
    }

    #[test]
    fn test_memory_store_rejects_invalid_json() {
        let store = MemoryStore::with_json(r#"[{"id": "a", "kind": "text"}, {"id": "a", "kind": "text"}]"#);
        assert!(matches!(store.load(), Err(EditorError::Construction(_))));
    }

    #[test]
    fn test_empty_store_leaves_builder_untouched() {
        let mut builder = Builder::new("test");
        let id = builder.add_block(BlockKind::Text);

        assert!(!builder.load_from(&MemoryStore::new()).unwrap());
        assert_eq!(builder.document().ids(), vec![id.as_str()]);
    }
}
