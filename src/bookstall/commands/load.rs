use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::BookStore;

/// Merge the inventory file into memory, downgrading every storage problem
/// to a warning. A missing file is silent; an unreadable one or malformed
/// lines produce messages and the program carries on with what it has.
pub fn merge_messages<S: BookStore>(inventory: &mut Inventory<S>, result: &mut CmdResult) {
    match inventory.load() {
        Ok(report) => {
            for line in &report.skipped {
                result.add_message(CmdMessage::warning(format!(
                    "Skipped line {} of {}: {}",
                    line.number,
                    inventory.resource(),
                    line.reason
                )));
            }
        }
        Err(e) => {
            result.add_message(CmdMessage::warning(format!(
                "Could not read {}: {}",
                inventory.resource(),
                e
            )));
        }
    }
}

pub fn run<S: BookStore>(inventory: &mut Inventory<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    merge_messages(inventory, &mut result);
    Ok(result)
}
