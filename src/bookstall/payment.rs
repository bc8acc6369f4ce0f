//! The payment port: an abstraction over collecting funds for a sale.
//!
//! Both provided methods are simulations that always approve. No
//! authorization, decline, or retry logic exists. The command layer emits
//! the "processing payment" message; implementations stay silent.

use rust_decimal::Decimal;

pub trait PaymentMethod {
    /// Human-readable kind, e.g. "cash" or "online".
    fn name(&self) -> &str;

    /// Attempt to collect `amount`. Returns whether the payment went
    /// through.
    fn collect(&self, amount: Decimal) -> bool;
}

pub struct CashPayment;

impl PaymentMethod for CashPayment {
    fn name(&self) -> &str {
        "cash"
    }

    fn collect(&self, _amount: Decimal) -> bool {
        true
    }
}

pub struct OnlinePayment;

impl PaymentMethod for OnlinePayment {
    fn name(&self) -> &str {
        "online"
    }

    fn collect(&self, _amount: Decimal) -> bool {
        true
    }
}
