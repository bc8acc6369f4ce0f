//! The inventory service: an insertion-ordered list of books plus the
//! storage backend it persists through.
//!
//! All title lookups are byte-exact and resolve to the first match in
//! insertion order; no case-folding or trimming is applied. Duplicate
//! titles are allowed.

use crate::error::Result;
use crate::model::Book;
use crate::store::{BookStore, LoadReport};

pub struct Inventory<S: BookStore> {
    books: Vec<Book>,
    store: S,
    resource: String,
}

impl<S: BookStore> Inventory<S> {
    /// Create an empty inventory that persists to `resource` through the
    /// given store.
    pub fn new(store: S, resource: impl Into<String>) -> Self {
        Self {
            books: Vec::new(),
            store,
            resource: resource.into(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Lazy in-order walk over the books. Call again to restart.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Append a book. Always succeeds; no duplicate check.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Find the first book with the given title.
    pub fn find(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title == title)
    }

    /// Add `delta` to the quantity of the first book matching `title`.
    /// Returns whether a match was found. The delta may be negative and no
    /// clamping to zero is applied here; only [`sell_book`](Self::sell_book)
    /// refuses to go below zero. Saturates at the `i32` bounds.
    pub fn update_stock(&mut self, title: &str, delta: i32) -> bool {
        match self.books.iter_mut().find(|b| b.title == title) {
            Some(book) => {
                book.quantity = book.quantity.saturating_add(delta);
                true
            }
            None => false,
        }
    }

    /// Sell one copy of the first in-stock book matching `title`, then
    /// persist the whole inventory. `Ok(false)` means no matching book had
    /// stock (no side effect). An `Err` can only come from the persist
    /// step, after the in-memory decrement has already happened.
    pub fn sell_book(&mut self, title: &str) -> Result<bool> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.title == title && b.quantity > 0);
        match book {
            Some(book) => {
                book.quantity -= 1;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Merge the books found at the canonical resource into the in-memory
    /// sequence. Loaded books land after anything already present; no
    /// deduplication is attempted. Does not write back (mutating
    /// operations persist explicitly).
    pub fn load(&mut self) -> Result<LoadReport> {
        let report = self.store.load(&self.resource)?;
        self.books.extend(report.books.iter().cloned());
        Ok(report)
    }

    /// Save the full current sequence to the canonical resource.
    pub fn persist(&mut self) -> Result<()> {
        self.store.save(&self.books, &self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use rust_decimal_macros::dec;

    fn inventory() -> Inventory<MemoryStore> {
        Inventory::new(MemoryStore::new(), "inventory.txt")
    }

    #[test]
    fn add_preserves_insertion_order_with_duplicates() {
        let mut inv = inventory();
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 2));
        inv.add_book(Book::new("Emma", "Austen", dec!(9.99), 1));
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 5));

        let titles: Vec<_> = inv.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Emma", "Dune"]);
    }

    #[test]
    fn update_stock_adds_delta_to_first_match() {
        let mut inv = inventory();
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 3));
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 10));

        assert!(inv.update_stock("Dune", 5));
        assert_eq!(inv.books()[0].quantity, 8);
        assert_eq!(inv.books()[1].quantity, 10);
    }

    #[test]
    fn update_stock_missing_title_changes_nothing() {
        let mut inv = inventory();
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 3));

        assert!(!inv.update_stock("Emma", 5));
        assert_eq!(inv.books()[0].quantity, 3);
    }

    #[test]
    fn update_stock_does_not_clamp_negative_deltas() {
        let mut inv = inventory();
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 1));

        assert!(inv.update_stock("Dune", -4));
        assert_eq!(inv.books()[0].quantity, -3);
    }

    #[test]
    fn update_stock_saturates_at_the_i32_bound() {
        let mut inv = inventory();
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), i32::MAX));

        assert!(inv.update_stock("Dune", 1));
        assert_eq!(inv.books()[0].quantity, i32::MAX);
    }

    #[test]
    fn sell_decrements_by_one_and_persists() {
        let mut inv = inventory();
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 2));

        assert!(inv.sell_book("Dune").unwrap());
        assert_eq!(inv.books()[0].quantity, 1);
        assert_eq!(inv.store.saved("inventory.txt")[0].quantity, 1);
    }

    #[test]
    fn sell_at_zero_fails_repeatedly_without_mutation() {
        let mut inv = inventory();
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 0));

        for _ in 0..3 {
            assert!(!inv.sell_book("Dune").unwrap());
        }
        assert_eq!(inv.books()[0].quantity, 0);
        assert!(inv.store.saved("inventory.txt").is_empty());
    }

    #[test]
    fn sell_skips_exhausted_duplicate_in_favor_of_stocked_one() {
        let mut inv = inventory();
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 0));
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 4));

        assert!(inv.sell_book("Dune").unwrap());
        assert_eq!(inv.books()[0].quantity, 0);
        assert_eq!(inv.books()[1].quantity, 3);
    }

    #[test]
    fn load_merges_after_existing_books() {
        let mut store = MemoryStore::new();
        store
            .save(&[Book::new("Emma", "Austen", dec!(9.99), 1)], "inventory.txt")
            .unwrap();
        let mut inv = Inventory::new(store, "inventory.txt");
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 2));

        inv.load().unwrap();

        let titles: Vec<_> = inv.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Emma"]);
    }

    #[test]
    fn load_does_not_write_back() {
        let mut store = MemoryStore::new();
        store
            .save(&[Book::new("Emma", "Austen", dec!(9.99), 1)], "inventory.txt")
            .unwrap();
        let mut inv = Inventory::new(store, "inventory.txt");
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 2));

        inv.load().unwrap();

        // The stored copy still holds only what was saved, not the merge.
        assert_eq!(inv.store.saved("inventory.txt").len(), 1);
    }
}
