//! Rowdb - an in-memory page-addressed row store in Rust
//!
//! This crate provides the storage core of a minimal tabular data engine:
//! a fixed-schema, append-only table whose rows are packed into fixed-size
//! memory pages, plus the thin line-oriented command layer that drives it.
//!
//! # Architecture
//!
//! The system is organized into strictly layered components:
//!
//! - **Row Codec** (`row`): The fixed binary layout of one record
//!   - `RowLayout`: Field widths, offsets, and page/capacity arithmetic
//!   - `Row`: A record plus its serialize/deserialize against a layout
//!
//! - **Paged Store** (`storage`): Owns page memory and computes row addresses
//!   - `Page`: A fixed 4 KB buffer handing out bounds-checked slot views
//!   - `Table`: A lazy arena of pages supporting append and full scan
//!
//! - **Command Layer** (`repl`): Line-oriented glue over the store
//!   - `Statement`: Parsing and validation of `insert` / `select`
//!   - `run`: The prompt-read-execute loop, exiting on `.exit`
//!
//! # Example
//!
//! ```rust
//! use rowdb::row::{Row, RowLayout};
//! use rowdb::storage::Table;
//!
//! let mut table = Table::new(RowLayout::packed());
//! table.insert(&Row::new(1, "alice", "alice@x.com")).unwrap();
//!
//! for row in table.scan() {
//!     println!("{row}");
//! }
//! ```

pub mod common;
pub mod repl;
pub mod row;
pub mod storage;

// Re-export commonly used types at the crate root
pub use common::{
    DbError, PageId, Result, RowIndex, COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, PAGE_SIZE,
    TABLE_MAX_PAGES,
};
