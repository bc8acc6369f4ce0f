use crate::commands::{CmdMessage, CmdResult, NewBook};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Book;
use crate::store::BookStore;

use super::load::merge_messages;

/// Append the given books, merge whatever the inventory file already holds
/// (the file's books land after the new ones), then persist and list the
/// combined inventory.
pub fn run<S: BookStore>(inventory: &mut Inventory<S>, new_books: &[NewBook]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for nb in new_books {
        inventory.add_book(Book::new(
            nb.title.clone(),
            nb.author.clone(),
            nb.price,
            nb.quantity,
        ));
    }

    merge_messages(inventory, &mut result);

    if let Err(e) = inventory.persist() {
        result.add_message(CmdMessage::warning(format!(
            "Could not write {}: {}",
            inventory.resource(),
            e
        )));
    } else if !new_books.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Added {} book(s) to the inventory",
            new_books.len()
        )));
    }

    Ok(result.with_listed_books(inventory.books().to_vec()))
}
