use crate::common::{DbError, PageId, Result, RowIndex, TABLE_MAX_PAGES};
use crate::row::{Row, RowLayout};

use super::Page;

/// A bounded, append-only table of fixed-width rows.
///
/// Rows live at logical positions `0..num_rows` with no gaps; position `n`
/// maps to page `n / rows_per_page` at byte offset
/// `(n % rows_per_page) * row_size`. The backing pages form an arena of
/// `TABLE_MAX_PAGES` slots, each allocated the first time a row address
/// inside it is touched. Dropping the table releases every allocated page
/// in one pass; nothing borrowed from the table outlives it.
///
/// The table is single-owner and synchronous. Sharing it across threads
/// requires external synchronization, which this design deliberately does
/// not provide.
pub struct Table {
    layout: RowLayout,
    pages: Vec<Option<Page>>,
    num_rows: RowIndex,
}

impl Table {
    /// Creates an empty table. No pages are allocated until the first insert.
    pub fn new(layout: RowLayout) -> Self {
        Self {
            layout,
            pages: (0..TABLE_MAX_PAGES).map(|_| None).collect(),
            num_rows: 0,
        }
    }

    /// The row layout this table was created with.
    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    /// Number of rows currently stored.
    pub fn num_rows(&self) -> RowIndex {
        self.num_rows
    }

    /// Total row capacity under this table's layout.
    pub fn max_rows(&self) -> RowIndex {
        self.layout.max_rows() as RowIndex
    }

    /// Returns true once the table has reached capacity.
    pub fn is_full(&self) -> bool {
        self.num_rows >= self.max_rows()
    }

    /// Number of pages currently backed by memory.
    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    /// Appends a row at the next logical position.
    ///
    /// Fails with [`DbError::TableFull`] once capacity is reached, without
    /// mutating or allocating anything. Retrying cannot succeed; the caller
    /// must treat it as terminal for that row. The row bytes are fully
    /// written before the row count advances, so a scan never observes a
    /// populated index without its data.
    pub fn insert(&mut self, row: &Row) -> Result<()> {
        if self.is_full() {
            return Err(DbError::TableFull);
        }

        let layout = self.layout;
        let slot = self.row_slot_mut(self.num_rows);
        row.serialize(&layout, slot);
        self.num_rows += 1;

        Ok(())
    }

    /// Starts a fresh scan over the rows present right now, in insertion
    /// order. The iterator is lazy; each call restarts from row zero.
    pub fn scan(&self) -> Scan<'_> {
        Scan {
            table: self,
            next: 0,
            end: self.num_rows,
        }
    }

    /// Locates the writable slot for `row`, allocating its backing page on
    /// first touch. `row` must be below `max_rows`.
    fn row_slot_mut(&mut self, row: RowIndex) -> &mut [u8] {
        assert!(row < self.max_rows(), "row index out of range");

        let row_size = self.layout.row_size();
        let (page_id, offset) = self.locate(row);
        let page = self.pages[page_id.as_usize()].get_or_insert_with(Page::new);
        page.slot_mut(offset, row_size)
    }

    /// Locates the readable slot for `row`. `row` must be below `num_rows`,
    /// which also guarantees its page exists.
    fn row_slot(&self, row: RowIndex) -> &[u8] {
        assert!(row < self.num_rows, "row index out of range");

        let (page_id, offset) = self.locate(row);
        let page = self.pages[page_id.as_usize()]
            .as_ref()
            .expect("populated row has no backing page");
        page.slot(offset, self.layout.row_size())
    }

    fn locate(&self, row: RowIndex) -> (PageId, usize) {
        let rows_per_page = self.layout.rows_per_page() as RowIndex;
        let page_id = PageId::new(row / rows_per_page);
        let offset = (row % rows_per_page) as usize * self.layout.row_size();
        (page_id, offset)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(RowLayout::default())
    }
}

/// Lazy iterator over a table's rows in insertion order.
///
/// Captures the row count at creation time; rows inserted afterwards are
/// not part of this traversal.
pub struct Scan<'a> {
    table: &'a Table,
    next: RowIndex,
    end: RowIndex,
}

impl Iterator for Scan<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next >= self.end {
            return None;
        }

        let layout = self.table.layout;
        let row = Row::deserialize(&layout, self.table.row_slot(self.next));
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Scan<'_> {}
