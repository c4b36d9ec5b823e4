//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::interchange::{export, import};
use crate::shapes::Element;
use std::collections::BTreeMap;

/// In-memory storage for testing and ephemeral use. Drawings are kept as
/// interchange text, exactly as a file would hold them.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    drawings: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, name: &str, elements: &[Element]) -> StorageResult<()> {
        self.drawings.insert(name.to_string(), export(elements));
        Ok(())
    }

    fn load(&self, name: &str) -> StorageResult<Vec<Element>> {
        self.drawings
            .get(name)
            .map(|text| import(text))
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn delete(&mut self, name: &str) -> StorageResult<()> {
        self.drawings.remove(name);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        Ok(self.drawings.keys().cloned().collect())
    }

    fn exists(&self, name: &str) -> StorageResult<bool> {
        Ok(self.drawings.contains_key(name))
    }
}
