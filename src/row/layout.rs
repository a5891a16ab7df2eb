use crate::common::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, ID_SIZE, PAGE_SIZE, TABLE_MAX_PAGES};

/// Serialized row layout:
///
/// +-----------+--------------------+-------------------+
/// | id        | username           | email             |
/// | (4 bytes) | (32 or 33 bytes)   | (255 or 256 bytes)|
/// +-----------+--------------------+-------------------+
///
/// All three fields are fixed-width and live at compile-time-known offsets,
/// so a row always serializes to exactly `row_size()` bytes regardless of
/// how much text the record actually holds.
///
/// Two variants exist for the text fields:
///
/// - [`RowLayout::packed`] stores exactly the usable text width per field.
///   A field filled to capacity has no trailing NUL, so the stored bytes are
///   not terminator-safe for C-style string handling.
/// - [`RowLayout::nul_terminated`] reserves one extra byte per text field,
///   guaranteeing a NUL after the text even at full capacity. Rows are two
///   bytes wider, which lowers `rows_per_page()` and `max_rows()`.
///
/// The usable text capacity is the same (32 / 255 bytes) under both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    username_width: usize,
    email_width: usize,
}

impl RowLayout {
    /// Layout storing exactly the usable text width per field.
    ///
    /// Row size 291, 14 rows per page, 1400 rows per table.
    pub const fn packed() -> Self {
        Self {
            username_width: COLUMN_USERNAME_SIZE,
            email_width: COLUMN_EMAIL_SIZE,
        }
    }

    /// Layout reserving one terminator byte per text field.
    ///
    /// Row size 293, 13 rows per page, 1300 rows per table.
    pub const fn nul_terminated() -> Self {
        Self {
            username_width: COLUMN_USERNAME_SIZE + 1,
            email_width: COLUMN_EMAIL_SIZE + 1,
        }
    }

    /// Stored width of the username field.
    pub const fn username_width(&self) -> usize {
        self.username_width
    }

    /// Stored width of the email field.
    pub const fn email_width(&self) -> usize {
        self.email_width
    }

    /// Byte offset of the id field within a row.
    pub const fn id_offset(&self) -> usize {
        0
    }

    /// Byte offset of the username field within a row.
    pub const fn username_offset(&self) -> usize {
        self.id_offset() + ID_SIZE
    }

    /// Byte offset of the email field within a row.
    pub const fn email_offset(&self) -> usize {
        self.username_offset() + self.username_width
    }

    /// Total serialized size of one row.
    pub const fn row_size(&self) -> usize {
        ID_SIZE + self.username_width + self.email_width
    }

    /// Whole rows that fit in one page. A row never straddles a page
    /// boundary; the remainder bytes of each page stay unused.
    pub const fn rows_per_page(&self) -> usize {
        PAGE_SIZE / self.row_size()
    }

    /// Total row capacity of a table under this layout.
    pub const fn max_rows(&self) -> usize {
        self.rows_per_page() * TABLE_MAX_PAGES
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::packed()
    }
}
