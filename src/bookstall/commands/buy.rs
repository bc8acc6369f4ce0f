use crate::commands::{CmdMessage, CmdResult, PurchaseOutcome};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::payment::PaymentMethod;
use crate::store::BookStore;

/// The purchase workflow: look the title up, charge the payment method,
/// then decrement stock. The payment port is never touched when the title
/// is absent; a sell that fails after payment means the matched book was
/// out of stock.
pub fn run<S: BookStore>(
    inventory: &mut Inventory<S>,
    payment: &dyn PaymentMethod,
    customer: &str,
    title: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let price = match inventory.find(title) {
        Some(book) => book.price,
        None => {
            result.add_message(CmdMessage::error("Book not found in inventory!"));
            return Ok(result.with_purchase(PurchaseOutcome::NotFound));
        }
    };

    result.add_message(CmdMessage::info(format!(
        "Processing {} payment of ${}",
        payment.name(),
        price
    )));
    if !payment.collect(price) {
        result.add_message(CmdMessage::error("Payment failed"));
        return Ok(result);
    }

    match inventory.sell_book(title) {
        Ok(true) => {
            result.add_message(CmdMessage::success(format!("{} bought {}", customer, title)));
            Ok(result.with_purchase(PurchaseOutcome::Bought))
        }
        Ok(false) => {
            result.add_message(CmdMessage::error("Book out of stock!"));
            Ok(result.with_purchase(PurchaseOutcome::OutOfStock))
        }
        Err(e) => {
            result.add_message(CmdMessage::success(format!("{} bought {}", customer, title)));
            result.add_message(CmdMessage::warning(format!(
                "Sale recorded but {} was not written: {}",
                inventory.resource(),
                e
            )));
            Ok(result.with_purchase(PurchaseOutcome::Bought))
        }
    }
}
