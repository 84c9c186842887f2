use super::CardStore;
use crate::error::{CardzError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<String, Vec<u8>>,
    marker: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardStore for InMemoryStore {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        let bytes = self
            .files
            .remove(old)
            .ok_or_else(|| CardzError::Store(format!("No such file: {}", old)))?;
        self.files.insert(new.to_string(), bytes);
        Ok(())
    }

    fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| CardzError::Store(format!("No such file: {}", name)))
    }

    fn write_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.files.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn read_marker(&self) -> Result<Option<String>> {
        Ok(self.marker.clone())
    }

    fn write_marker(&mut self, name: Option<&str>) -> Result<()> {
        self.marker = name.map(str::to_string);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::codec;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_new_card(mut self, title: &str) -> Self {
            let name = codec::encode(0, 0, title);
            self.store.write_bytes(&name, b"%PDF-1.4").unwrap();
            self
        }

        pub fn with_scheduled_card(mut self, awake: u64, sleep: u64, title: &str) -> Self {
            let name = codec::encode(awake, sleep, title);
            self.store.write_bytes(&name, b"%PDF-1.4").unwrap();
            self
        }

        pub fn with_plain_file(mut self, name: &str) -> Self {
            self.store.write_bytes(name, b"%PDF-1.4").unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_of_missing_file_errors() {
        let mut store = InMemoryStore::new();
        assert!(store.rename("nope.pdf", "yes.pdf").is_err());
    }

    #[test]
    fn rename_keeps_contents() {
        let mut store = InMemoryStore::new();
        store.write_bytes("a.pdf", b"payload").unwrap();
        store.rename("a.pdf", "b.pdf").unwrap();

        assert!(!store.exists("a.pdf"));
        assert_eq!(store.read_bytes("b.pdf").unwrap(), b"payload");
    }
}
