use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::BookStore;

/// Sell one copy of `title`, distinguishing a missing title from an
/// exhausted one. A failed write after the sale is a warning, not a
/// failure; the in-memory sale stands.
pub fn run<S: BookStore>(inventory: &mut Inventory<S>, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if inventory.find(title).is_none() {
        result.add_message(CmdMessage::error(format!(
            "No book titled '{}' in the inventory",
            title
        )));
        return Ok(result);
    }

    match inventory.sell_book(title) {
        Ok(true) => {
            // Duplicate titles are possible; report the total that remains.
            let left: i32 = inventory
                .iter()
                .filter(|b| b.title == title)
                .map(|b| b.quantity)
                .sum();
            result.add_message(CmdMessage::success(format!(
                "Sold one copy of '{}' ({} left)",
                title, left
            )));
            if let Some(book) = inventory.find(title).cloned() {
                result.affected_books.push(book);
            }
        }
        Ok(false) => {
            result.add_message(CmdMessage::error(format!("'{}' is out of stock", title)));
        }
        Err(e) => {
            // The decrement happened; only the write failed.
            result.add_message(CmdMessage::success(format!("Sold one copy of '{}'", title)));
            result.add_message(CmdMessage::warning(format!(
                "Sale recorded but {} was not written: {}",
                inventory.resource(),
                e
            )));
        }
    }

    Ok(result)
}
