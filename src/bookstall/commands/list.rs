use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::BookStore;

pub fn run<S: BookStore>(inventory: &Inventory<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_books(inventory.iter().cloned().collect()))
}
