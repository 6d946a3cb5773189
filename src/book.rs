//! Book records stored in the tree
//!
//! Records are plain data. Field length limits are enforced where text
//! enters the system (see [`crate::catalogue::parse_records`]), not here.

use std::fmt;

/// Key type ordering the tree.
pub type Key = i64;

/// A single book record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Book {
    /// Ordering key (duplicates allowed).
    pub key: Key,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Year of publication.
    pub pub_year: i32,
    /// Number of pages.
    pub page_count: u32,
    /// Copies sold.
    pub quantity_sold: u64,
}

impl Book {
    /// Construct a new book record.
    pub fn new(
        key: Key,
        title: impl Into<String>,
        author: impl Into<String>,
        pub_year: i32,
        page_count: u32,
        quantity_sold: u64,
    ) -> Self {
        Self {
            key,
            title: title.into(),
            author: author.into(),
            pub_year,
            page_count,
            quantity_sold,
        }
    }

    /// Record carrying only a key, for tests and benchmarks.
    pub fn keyed(key: Key) -> Self {
        Self::new(key, format!("Book {key}"), "Anonymous", 0, 0, 0)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Year: {}", self.pub_year)?;
        writeln!(f, "Pages: {}", self.page_count)?;
        write!(f, "Sold: {}", self.quantity_sold)
    }
}
