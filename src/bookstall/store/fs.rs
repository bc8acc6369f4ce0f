use super::{BookStore, LoadReport, SkippedLine};
use crate::error::{BookstallError, Result};
use crate::model::Book;
use rust_decimal::Decimal;
use std::fs;
use std::io::ErrorKind;
use std::str::FromStr;

/// Flat-file storage. Each book occupies one newline-terminated line of
/// comma-separated fields:
///
/// ```text
/// index,title,author,price,quantity
/// ```
///
/// There is no header and no quoting; a comma inside a title or author
/// corrupts that line (accepted limitation). The index is re-numbered from
/// zero on every save.
#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

fn encode(books: &[Book]) -> String {
    let mut out = String::new();
    for (row, book) in books.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            row, book.title, book.author, book.price, book.quantity
        ));
    }
    out
}

fn decode_line(line: &str) -> std::result::Result<Book, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 5 {
        return Err(format!("expected 5 fields, found {}", fields.len()));
    }
    // fields[0] is the transient row index; discard it.
    let price =
        Decimal::from_str(fields[3]).map_err(|_| format!("invalid price '{}'", fields[3]))?;
    let quantity = fields[4]
        .parse::<i32>()
        .map_err(|_| format!("invalid quantity '{}'", fields[4]))?;
    Ok(Book::new(fields[1], fields[2], price, quantity))
}

impl BookStore for FileStore {
    fn save(&mut self, books: &[Book], resource: &str) -> Result<()> {
        fs::write(resource, encode(books)).map_err(BookstallError::Io)
    }

    fn load(&self, resource: &str) -> Result<LoadReport> {
        let content = match fs::read_to_string(resource) {
            Ok(content) => content,
            // No file yet means no data, not a failure.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadReport::default()),
            Err(e) => return Err(BookstallError::Io(e)),
        };

        let mut report = LoadReport::default();
        for (i, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match decode_line(line) {
                Ok(book) => report.books.push(book),
                Err(reason) => report.skipped.push(SkippedLine {
                    number: i + 1,
                    reason,
                }),
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn temp_resource(dir: &tempfile::TempDir) -> String {
        dir.path().join("inventory.txt").to_string_lossy().into_owned()
    }

    #[test]
    fn round_trips_books_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let resource = temp_resource(&dir);
        let books = vec![
            Book::new("Dune", "Herbert", dec!(15.50), 2),
            Book::new("Emma", "Austen", dec!(9.99), 7),
            Book::new("Dune", "Herbert", dec!(15.50), 1),
        ];

        let mut store = FileStore::new();
        store.save(&books, &resource).unwrap();
        let report = store.load(&resource).unwrap();

        assert_eq!(report.books, books);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn save_renumbers_rows_from_zero() {
        let dir = tempfile::tempdir().unwrap();
        let resource = temp_resource(&dir);
        let books = vec![
            Book::new("Dune", "Herbert", dec!(15.50), 2),
            Book::new("Emma", "Austen", dec!(9.99), 7),
        ];

        FileStore::new().save(&books, &resource).unwrap();
        let content = fs::read_to_string(&resource).unwrap();

        assert_eq!(content, "0,Dune,Herbert,15.50,2\n1,Emma,Austen,9.99,7\n");
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let report = FileStore::new().load(&temp_resource(&dir)).unwrap();
        assert!(report.books.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let resource = temp_resource(&dir);
        fs::write(
            &resource,
            "0,Dune,Herbert,15.50,2\nnot a book\n2,Emma,Austen,nine,7\n3,Ubik,Dick,6.25,oops\n4,Walden,Thoreau,12.00,3\n",
        )
        .unwrap();

        let report = FileStore::new().load(&resource).unwrap();

        assert_eq!(report.books.len(), 2);
        assert_eq!(report.books[0].title, "Dune");
        assert_eq!(report.books[1].title, "Walden");
        assert_eq!(report.skipped.len(), 3);
        assert_eq!(report.skipped[0].number, 2);
        assert_eq!(report.skipped[1].number, 3);
        assert_eq!(report.skipped[2].number, 4);
    }

    #[test]
    fn index_field_is_discarded_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let resource = temp_resource(&dir);
        // Indexes here are stale; the decoder must not care.
        fs::write(&resource, "7,Dune,Herbert,15.50,2\n99,Emma,Austen,9.99,7\n").unwrap();

        let report = FileStore::new().load(&resource).unwrap();
        assert_eq!(report.books[0], Book::new("Dune", "Herbert", dec!(15.50), 2));
        assert_eq!(report.books[1], Book::new("Emma", "Austen", dec!(9.99), 7));
    }
}
