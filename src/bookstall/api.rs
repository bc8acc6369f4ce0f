//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! bookstall operations. It dispatches to command functions and returns
//! structured `Result<CmdResult>` values; it never prints and it holds no
//! business logic of its own.
//!
//! `BookstallApi<S: BookStore>` is generic over the storage backend:
//! production wires in `FileStore`, tests use `MemoryStore`, and the inert
//! `CloudStore` slots in unchanged.

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::payment::PaymentMethod;
use crate::store::BookStore;
use std::path::Path;

pub struct BookstallApi<S: BookStore> {
    inventory: Inventory<S>,
}

impl<S: BookStore> BookstallApi<S> {
    /// Wire up an API over the given store and canonical resource name
    /// (for `FileStore`, the inventory file path).
    pub fn new(store: S, resource: impl Into<String>) -> Self {
        Self {
            inventory: Inventory::new(store, resource),
        }
    }

    /// Merge the persisted inventory into memory.
    pub fn load_inventory(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.inventory)
    }

    /// Add books, merge the persisted inventory, persist, and list.
    pub fn add_books(&mut self, new_books: &[commands::NewBook]) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, new_books)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn restock(&mut self, title: &str, delta: i32) -> Result<commands::CmdResult> {
        commands::restock::run(&mut self.inventory, title, delta)
    }

    pub fn sell(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::sell::run(&mut self.inventory, title)
    }

    pub fn buy(
        &mut self,
        payment: &dyn PaymentMethod,
        customer: &str,
        title: &str,
    ) -> Result<commands::CmdResult> {
        commands::buy::run(&mut self.inventory, payment, customer, title)
    }

    pub fn config(&self, config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, NewBook, PurchaseOutcome};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::CashPayment;
    use crate::store::memory::MemoryStore;
    use rust_decimal_macros::dec;

    #[test]
    fn add_then_sell_through_the_facade() {
        let mut api = BookstallApi::new(MemoryStore::new(), "inventory.txt");

        api.add_books(&[NewBook::new(
            "Dune".into(),
            "Herbert".into(),
            dec!(15.50),
            2,
        )])
        .unwrap();
        let result = api.buy(&CashPayment, "Paul", "Dune").unwrap();

        assert_eq!(result.purchase, Some(PurchaseOutcome::Bought));
        let listed = api.list_books().unwrap().listed_books;
        assert_eq!(listed[0].quantity, 1);
    }
}
