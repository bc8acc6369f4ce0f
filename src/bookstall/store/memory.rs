use super::{BookStore, LoadReport};
use crate::error::Result;
use crate::model::Book;
use std::collections::HashMap;

/// In-memory storage for tests. Books are kept per resource name so the
/// save/load contract matches [`super::fs::FileStore`] without touching the
/// filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    resources: HashMap<String, Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// What a given resource currently holds, for assertions.
    pub fn saved(&self, resource: &str) -> &[Book] {
        self.resources.get(resource).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl BookStore for MemoryStore {
    fn save(&mut self, books: &[Book], resource: &str) -> Result<()> {
        self.resources.insert(resource.to_string(), books.to_vec());
        Ok(())
    }

    fn load(&self, resource: &str) -> Result<LoadReport> {
        Ok(LoadReport {
            books: self.resources.get(resource).cloned().unwrap_or_default(),
            skipped: Vec::new(),
        })
    }
}
