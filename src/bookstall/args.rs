use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "bookstall")]
#[command(about = "Command-line book inventory manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file to use (overrides the configured one)
    #[arg(short, long, global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add books to the shelf
    #[command(alias = "a")]
    Add {
        /// Title of the book (omit all fields for interactive bulk entry)
        title: Option<String>,

        /// Author of the book
        author: Option<String>,

        /// Price of the book, e.g. 15.50
        price: Option<Decimal>,

        /// Number of copies to add
        quantity: Option<i32>,
    },

    /// List the inventory
    #[command(alias = "ls")]
    List,

    /// Adjust the stock of a book by a delta
    Restock {
        /// Title of the book
        title: String,

        /// Copies to add (negative values subtract)
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },

    /// Sell one copy of a book
    Sell {
        /// Title of the book
        title: String,
    },

    /// Buy a book as a customer
    #[command(alias = "b")]
    Buy {
        /// Title of the book (prompted for when omitted)
        title: Option<String>,

        /// Customer name (prompted for when omitted)
        #[arg(short, long)]
        customer: Option<String>,

        /// Payment method to charge
        #[arg(short, long, value_enum, default_value = "cash")]
        payment: PaymentKind,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., inventory-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PaymentKind {
    Cash,
    Online,
}
