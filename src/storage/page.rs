use crate::common::PAGE_SIZE;

/// A fixed-size, zero-initialized block of row storage.
///
/// Pages are owned exclusively by the table that allocated them. Callers
/// never see raw offsets; a page only hands out bounded slices, so every
/// slot access is bounds-checked at the arena boundary.
pub struct Page {
    data: Box<[u8; PAGE_SIZE]>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            data: Box::new([0u8; PAGE_SIZE]),
        }
    }

    /// Borrows the `len` bytes starting at `offset`.
    pub fn slot(&self, offset: usize, len: usize) -> &[u8] {
        assert!(offset + len <= PAGE_SIZE, "slot out of page bounds");
        &self.data[offset..offset + len]
    }

    /// Mutably borrows the `len` bytes starting at `offset`.
    pub fn slot_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        assert!(offset + len <= PAGE_SIZE, "slot out of page bounds");
        &mut self.data[offset..offset + len]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
