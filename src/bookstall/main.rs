use bookstall::api::{
    BookstallApi, CmdMessage, ConfigAction, MessageLevel, NewBook, PurchaseOutcome,
};
use bookstall::config::BookstallConfig;
use bookstall::error::{BookstallError, Result};
use bookstall::model::Book;
use bookstall::payment::{CashPayment, OnlinePayment, PaymentMethod};
use bookstall::store::fs::FileStore;
use clap::Parser;
use colored::*;
use rust_decimal::Decimal;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, PaymentKind};

const CONFIG_DIR: &str = ".bookstall";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: BookstallApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            price,
            quantity,
        }) => handle_add(&mut ctx, title, author, price, quantity),
        Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Restock { title, delta }) => handle_restock(&mut ctx, title, delta),
        Some(Commands::Sell { title }) => handle_sell(&mut ctx, title),
        Some(Commands::Buy {
            title,
            customer,
            payment,
        }) => handle_buy(&mut ctx, title, customer, payment),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = BookstallConfig::load(Path::new(CONFIG_DIR)).unwrap_or_default();
    let file = cli.file.clone().unwrap_or(config.inventory_file);
    let api = BookstallApi::new(FileStore::new(), file);
    Ok(AppContext { api })
}

fn handle_add(
    ctx: &mut AppContext,
    title: Option<String>,
    author: Option<String>,
    price: Option<Decimal>,
    quantity: Option<i32>,
) -> Result<()> {
    let new_books = match (title, author, price, quantity) {
        (Some(title), Some(author), Some(price), Some(quantity)) => {
            vec![NewBook::new(title, author, price, quantity)]
        }
        (None, None, None, None) => prompt_bulk_add()?,
        _ => {
            return Err(BookstallError::Api(
                "Provide title, author, price and quantity together (or none for interactive entry)"
                    .into(),
            ));
        }
    };

    let result = ctx.api.add_books(&new_books)?;
    print_messages(&result.messages);
    println!("Current Inventory:");
    print_books(&result.listed_books);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let loaded = ctx.api.load_inventory()?;
    print_messages(&loaded.messages);
    let result = ctx.api.list_books()?;
    print_books(&result.listed_books);
    Ok(())
}

fn handle_restock(ctx: &mut AppContext, title: String, delta: i32) -> Result<()> {
    let loaded = ctx.api.load_inventory()?;
    print_messages(&loaded.messages);
    let result = ctx.api.restock(&title, delta)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sell(ctx: &mut AppContext, title: String) -> Result<()> {
    let loaded = ctx.api.load_inventory()?;
    print_messages(&loaded.messages);
    let result = ctx.api.sell(&title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_buy(
    ctx: &mut AppContext,
    title: Option<String>,
    customer: Option<String>,
    payment: PaymentKind,
) -> Result<()> {
    let loaded = ctx.api.load_inventory()?;
    print_messages(&loaded.messages);

    let customer = match customer {
        Some(name) => name,
        None => prompt("Enter your name: ")?,
    };
    println!("Welcome to the bookstall, {}!", customer);

    println!("Current Inventory:");
    let listing = ctx.api.list_books()?;
    print_books(&listing.listed_books);

    let title = match title {
        Some(title) => title,
        None => prompt("Enter the book you want to buy: ")?,
    };

    let method: Box<dyn PaymentMethod> = match payment {
        PaymentKind::Cash => Box::new(CashPayment),
        PaymentKind::Online => Box::new(OnlinePayment),
    };

    let result = ctx.api.buy(method.as_ref(), &customer, &title)?;
    print_messages(&result.messages);
    if result.purchase == Some(PurchaseOutcome::Bought) {
        println!("{}", "Thank you for visiting!".dimmed());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(Path::new(CONFIG_DIR), action)?;
    if let Some(config) = &result.config {
        println!("inventory-file = {}", config.inventory_file);
    }
    print_messages(&result.messages);
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn prompt_parse<T: FromStr>(label: &str) -> Result<T>
where
    T::Err: Display,
{
    loop {
        let input = prompt(label)?;
        match input.trim().parse() {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("{}", format!("Invalid value: {}", e).red()),
        }
    }
}

fn prompt_bulk_add() -> Result<Vec<NewBook>> {
    let count: usize = prompt_parse("Enter the number of books to add: ")?;
    let mut new_books = Vec::with_capacity(count);
    for i in 0..count {
        println!("Book {} of {}:", i + 1, count);
        let title = prompt("  Title: ")?;
        let author = prompt("  Author: ")?;
        let price: Decimal = prompt_parse("  Price: ")?;
        let quantity: i32 = prompt_parse("  Quantity: ")?;
        new_books.push(NewBook::new(title, author, price, quantity));
    }
    Ok(new_books)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books in inventory.");
        return;
    }

    let title_width = books.iter().map(|b| b.title.width()).max().unwrap_or(0);
    let author_width = books.iter().map(|b| b.author.width()).max().unwrap_or(0);

    for (row, book) in books.iter().enumerate() {
        let price = format!("${}", book.price);
        let quantity = if book.quantity > 0 {
            format!("x{}", book.quantity).normal()
        } else {
            "out of stock".red()
        };
        println!(
            "{:>3}. {}  {}  {:>9}  {}",
            row + 1,
            pad_to_width(&book.title, title_width).bold(),
            pad_to_width(&book.author, author_width),
            price,
            quantity
        );
    }
}
