//! File-based storage.

use super::{Storage, StorageError, StorageResult};
use crate::interchange::{export, import};
use crate::shapes::Element;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of drawing files.
pub const DRAWING_EXTENSION: &str = "dxf";

/// Read a drawing file. Only I/O and encoding problems are errors; the
/// content itself is parsed leniently.
pub fn read_drawing(path: &Path) -> StorageResult<Vec<Element>> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| StorageError::Serialization(format!("{} is not UTF-8: {}", path.display(), e)))?;
    Ok(import(&text))
}

/// Write elements to a drawing file, replacing its contents.
pub fn write_drawing(path: &Path, elements: &[Element]) -> StorageResult<()> {
    fs::write(path, export(elements))
        .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

/// Directory of drawing files.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(|e| StorageError::Io(format!("Failed to create storage directory: {}", e)))?;
        }
        Ok(Self { base_path })
    }

    fn drawing_path(&self, name: &str) -> PathBuf {
        // Keep names safe for filenames.
        let safe: String = name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{safe}.{DRAWING_EXTENSION}"))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&mut self, name: &str, elements: &[Element]) -> StorageResult<()> {
        write_drawing(&self.drawing_path(name), elements)
    }

    fn load(&self, name: &str) -> StorageResult<Vec<Element>> {
        let path = self.drawing_path(name);
        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        read_drawing(&path)
    }

    fn delete(&mut self, name: &str) -> StorageResult<()> {
        let path = self.drawing_path(name);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| StorageError::Io(format!("Failed to delete {}: {}", path.display(), e)))?;
        }
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == DRAWING_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, name: &str) -> StorageResult<bool> {
        Ok(self.drawing_path(name).exists())
    }
}
