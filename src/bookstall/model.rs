use rust_decimal::Decimal;

/// A single book in the inventory.
///
/// `title` doubles as the lookup key for stock updates and sales. No
/// uniqueness is enforced; lookups match the first occurrence in insertion
/// order. Construction performs no validation (a negative price or quantity
/// is accepted as given).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: Decimal,
        quantity: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
            quantity,
        }
    }
}
