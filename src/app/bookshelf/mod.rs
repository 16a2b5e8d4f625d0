//! Bookshelf flow: fetch books once, group them by publication year and
//! present one year tab at a time.

pub mod grouping;
pub mod screen;

pub use grouping::{default_year, YearShelf};
pub use screen::{BookshelfScreen, ShelfView};
