//! Drawing persistence over the interchange text format.
//!
//! Every backend stores drawings as interchange text, so loading a drawing
//! has the same lossy semantics as importing it: rectangles do not come back.

mod file;
mod memory;

pub use file::{read_drawing, write_drawing, FileStorage, DRAWING_EXTENSION};
pub use memory::MemoryStorage;

use crate::shapes::Element;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Drawing not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A named collection of drawings.
pub trait Storage {
    /// Save a drawing, replacing any drawing with the same name.
    fn save(&mut self, name: &str, elements: &[Element]) -> StorageResult<()>;

    /// Load a drawing. Elements come back with fresh ids.
    fn load(&self, name: &str) -> StorageResult<Vec<Element>>;

    /// Delete a drawing. Deleting a missing drawing is not an error.
    fn delete(&mut self, name: &str) -> StorageResult<()>;

    /// Names of all stored drawings.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check if a drawing exists.
    fn exists(&self, name: &str) -> StorageResult<bool>;
}
