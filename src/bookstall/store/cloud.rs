use super::{BookStore, LoadReport};
use crate::error::Result;
use crate::model::Book;

/// Inert stand-in for a remote store. `save` performs no I/O and `load`
/// always yields an empty report. Exists to show the inventory service is
/// indifferent to which backend it holds.
#[derive(Debug, Default)]
pub struct CloudStore;

impl CloudStore {
    pub fn new() -> Self {
        Self
    }
}

impl BookStore for CloudStore {
    fn save(&mut self, _books: &[Book], _resource: &str) -> Result<()> {
        Ok(())
    }

    fn load(&self, _resource: &str) -> Result<LoadReport> {
        Ok(LoadReport::default())
    }
}
