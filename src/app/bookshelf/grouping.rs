//! Year grouping for the bookshelf tabs
//!
//! Books are partitioned by publication year. Buckets keep fetch order and
//! years are listed most recent first.

use std::collections::BTreeMap;

use crate::app::models::{Book, YearZone};

/// Books partitioned into publication-year buckets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearShelf {
    buckets: BTreeMap<i32, Vec<Book>>,
}

impl YearShelf {
    /// Groups `books` by publication year in `zone`
    pub fn group(books: &[Book], zone: YearZone) -> Self {
        let mut buckets: BTreeMap<i32, Vec<Book>> = BTreeMap::new();
        for book in books {
            buckets
                .entry(book.published_year(zone))
                .or_default()
                .push(book.clone());
        }
        Self { buckets }
    }

    /// Distinct years, most recent first
    pub fn years(&self) -> Vec<i32> {
        self.buckets.keys().rev().copied().collect()
    }

    /// Books published in `year`, in fetch order
    pub fn books_in(&self, year: i32) -> &[Book] {
        self.buckets.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.buckets.contains_key(&year)
    }

    /// Most recent year, if any
    pub fn latest_year(&self) -> Option<i32> {
        self.buckets.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of books across all buckets
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Year of the book with the latest publication timestamp
///
/// Ties go to the first such book in fetch order. Tied books share a
/// timestamp and therefore a year.
pub fn default_year(books: &[Book], zone: YearZone) -> Option<i32> {
    books
        .iter()
        .reduce(|latest, book| {
            if book.published_chapter_date > latest.published_chapter_date {
                book
            } else {
                latest
            }
        })
        .map(|book| book.published_year(zone))
}
