use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::BookStore;

/// Adjust the stock of the first book matching `title` by `delta` and
/// persist. The delta may be negative; no clamping happens here.
pub fn run<S: BookStore>(inventory: &mut Inventory<S>, title: &str, delta: i32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !inventory.update_stock(title, delta) {
        result.add_message(CmdMessage::error(format!(
            "No book titled '{}' in the inventory",
            title
        )));
        return Ok(result);
    }

    // update_stock returned true, so the title is present.
    let book = inventory.find(title).cloned();
    if let Err(e) = inventory.persist() {
        result.add_message(CmdMessage::warning(format!(
            "Stock updated but {} was not written: {}",
            inventory.resource(),
            e
        )));
    }
    if let Some(book) = book {
        result.add_message(CmdMessage::success(format!(
            "Stock for '{}' is now {}",
            book.title, book.quantity
        )));
        result.affected_books.push(book);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::memory::MemoryStore;
    use rust_decimal_macros::dec;

    #[test]
    fn restocks_first_match_and_persists() {
        let mut inv = Inventory::new(MemoryStore::new(), "inventory.txt");
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 3));

        let result = run(&mut inv, "Dune", 5).unwrap();

        assert_eq!(result.affected_books[0].quantity, 8);
        let report = inv.load().unwrap();
        assert_eq!(report.books[0].quantity, 8);
    }

    #[test]
    fn missing_title_reports_error_and_changes_nothing() {
        let mut inv = Inventory::new(MemoryStore::new(), "inventory.txt");
        inv.add_book(Book::new("Dune", "Herbert", dec!(15.50), 3));

        let result = run(&mut inv, "Emma", 5).unwrap();

        assert!(result.affected_books.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
        assert_eq!(inv.books()[0].quantity, 3);
    }
}
