//! # Storage Layer
//!
//! This module defines the storage abstraction for bookstall. The
//! [`BookStore`] trait allows the inventory service to work with different
//! persistence backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production flat-file storage
//!   - One book per line: `index,title,author,price,quantity`
//!   - The leading index is a row counter regenerated on every save and
//!     discarded on load; it is not a stable identifier
//! - [`cloud::CloudStore`]: Inert stand-in for a remote store
//!   - `save` does nothing, `load` always yields an empty report
//! - [`memory::MemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Resource Names
//!
//! Every operation takes a resource name (for `FileStore`, the file path).
//! The inventory service holds a single canonical resource it saves to and
//! loads from.
//!
//! ## Failure Semantics
//!
//! A missing resource on load is not an error: `load` returns an empty
//! [`LoadReport`] and the program continues with its in-memory state. Any
//! other I/O failure surfaces as an `Err`, which the command layer
//! downgrades to a warning message, so no storage problem is ever fatal.
//! Malformed lines are skipped individually and reported via
//! [`LoadReport::skipped`] rather than aborting the parse.

use crate::error::Result;
use crate::model::Book;

pub mod cloud;
pub mod fs;
pub mod memory;

/// A line the decoder could not turn into a [`Book`].
#[derive(Debug, Clone)]
pub struct SkippedLine {
    /// 1-based line number within the resource.
    pub number: usize,
    pub reason: String,
}

/// Outcome of a `load` operation: the decoded books plus any lines that
/// were skipped as malformed.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub books: Vec<Book>,
    pub skipped: Vec<SkippedLine>,
}

/// Abstract interface for inventory persistence.
pub trait BookStore {
    /// Save the full list of books to the named resource, replacing any
    /// prior content.
    fn save(&mut self, books: &[Book], resource: &str) -> Result<()>;

    /// Load all books found at the named resource. An absent resource
    /// yields an empty report, never an error.
    fn load(&self, resource: &str) -> Result<LoadReport>;
}
