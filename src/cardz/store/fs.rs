use super::CardStore;
use crate::error::{CardzError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Marker file holding the active card's filename.
const MARKER_FILENAME: &str = ".cardz-active";

/// Production store: one flat directory of card files plus the marker.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn marker_path(&self) -> PathBuf {
        self.root.join(MARKER_FILENAME)
    }
}

impl CardStore for DirStore {
    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(CardzError::Io)? {
            let entry = entry.map_err(CardzError::Io)?;
            if entry.file_type().map_err(CardzError::Io)?.is_file() {
                if let Ok(name) = entry.file_name().into_string() {
                    names.push(name);
                }
            }
        }
        Ok(names)
    }

    fn exists(&self, name: &str) -> bool {
        self.path_of(name).exists()
    }

    fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        fs::rename(self.path_of(old), self.path_of(new)).map_err(CardzError::Io)
    }

    fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        fs::read(self.path_of(name)).map_err(CardzError::Io)
    }

    fn write_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::write(self.path_of(name), bytes).map_err(CardzError::Io)
    }

    fn read_marker(&self) -> Result<Option<String>> {
        let Ok(content) = fs::read_to_string(self.marker_path()) else {
            return Ok(None);
        };
        let line = content.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(line.to_string()))
        }
    }

    fn write_marker(&mut self, name: Option<&str>) -> Result<()> {
        let content = match name {
            Some(name) => format!("{}\n", name),
            None => String::new(),
        };
        fs::write(self.marker_path(), content).map_err(CardzError::Io)
    }
}
