use crate::config::BookstallConfig;
use crate::model::Book;
use rust_decimal::Decimal;

pub mod add;
pub mod buy;
pub mod config;
pub mod list;
pub mod load;
pub mod restock;
pub mod sell;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Result of one purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Bought,
    OutOfStock,
    NotFound,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_books: Vec<Book>,
    pub affected_books: Vec<Book>,
    pub purchase: Option<PurchaseOutcome>,
    pub config: Option<BookstallConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_purchase(mut self, outcome: PurchaseOutcome) -> Self {
        self.purchase = Some(outcome);
        self
    }

    pub fn with_config(mut self, config: BookstallConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Input for an add operation, before it becomes a [`Book`].
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl NewBook {
    pub fn new(title: String, author: String, price: Decimal, quantity: i32) -> Self {
        Self {
            title,
            author,
            price,
            quantity,
        }
    }
}
