//! Seed catalogue and record text entry
//!
//! Record text is tab-separated, one book per line:
//!
//! ```text
//! key<TAB>title<TAB>author<TAB>year<TAB>pages<TAB>sold
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Field limits from
//! [`RecordLimits`] are checked here, at the boundary.

use std::str::FromStr;

use crate::book::{Book, Key};
use crate::config::RecordLimits;
use crate::tree::BookTree;
use crate::TreeError;

/// Insertion order of the seed catalogue.
pub const SEED_KEYS: [Key; 14] = [28, 12, 45, 33, 18, 39, 24, 30, 20, 15, 37, 50, 10, 42];

/// The sample books, in insertion order.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(28, "Mara", "Ioan Slavici", 1894, 450, 60_000),
        Book::new(12, "Baltagul", "Mihail Sadoveanu", 1930, 300, 45_000),
        Book::new(45, "Enigma Otiliei", "George Călinescu", 1938, 400, 70_000),
        Book::new(33, "Moromeții", "Marin Preda", 1955, 500, 80_000),
        Book::new(18, "Ion", "Liviu Rebreanu", 1920, 600, 75_000),
        Book::new(39, "Pădurea spânzuraților", "Liviu Rebreanu", 1922, 550, 67_000),
        Book::new(24, "Ultima noapte de dragoste", "Camil Petrescu", 1930, 320, 62_000),
        Book::new(30, "Adela", "Garabet Ibrăileanu", 1933, 280, 46_000),
        Book::new(20, "Scrinul negru", "George Călinescu", 1960, 500, 43_000),
        Book::new(15, "Ciuleandra", "Liviu Rebreanu", 1927, 270, 41_000),
        Book::new(37, "O scrisoare pierdută", "I.L. Caragiale", 1884, 150, 90_000),
        Book::new(50, "Amintiri din copilărie", "Ion Creangă", 1881, 200, 120_000),
        Book::new(10, "Moara cu noroc", "Ioan Slavici", 1881, 180, 38_000),
        Book::new(42, "Două loturi", "I.L. Caragiale", 1890, 100, 54_000),
    ]
}

/// Tree holding the seed catalogue.
pub fn seeded_tree() -> Result<BookTree, TreeError> {
    let mut tree = BookTree::new();
    tree.extend(seed_books())?;
    Ok(tree)
}

/// Parse tab-separated record lines.
pub fn parse_records(text: &str, limits: &RecordLimits) -> Result<Vec<Book>, TreeError> {
    let mut books = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        books.push(parse_line(line, idx + 1, limits)?);
    }

    Ok(books)
}

fn parse_line(line: &str, line_no: usize, limits: &RecordLimits) -> Result<Book, TreeError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    let [key, title, author, year, pages, sold] = fields[..] else {
        return Err(TreeError::InvalidRecord(format!(
            "line {line_no}: expected 6 tab-separated fields, found {}",
            fields.len()
        )));
    };

    let title = bounded_text("title", title, limits.max_title_len, line_no)?;
    let author = bounded_text("author", author, limits.max_author_len, line_no)?;

    Ok(Book {
        key: number("key", key, line_no)?,
        title,
        author,
        pub_year: number("year", year, line_no)?,
        page_count: number("pages", pages, line_no)?,
        quantity_sold: number("sold", sold, line_no)?,
    })
}

fn bounded_text(
    field: &str,
    value: &str,
    max_len: usize,
    line_no: usize,
) -> Result<String, TreeError> {
    if value.is_empty() {
        return Err(TreeError::InvalidRecord(format!(
            "line {line_no}: {field} is empty"
        )));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(TreeError::InvalidRecord(format!(
            "line {line_no}: {field} has {len} characters (max {max_len})"
        )));
    }
    Ok(value.to_string())
}

fn number<T: FromStr>(field: &str, value: &str, line_no: usize) -> Result<T, TreeError> {
    value.parse().map_err(|_| {
        TreeError::InvalidRecord(format!(
            "line {line_no}: invalid {field} '{value}'"
        ))
    })
}
