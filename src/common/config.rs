/// Size of a page in bytes (4 KB)
pub const PAGE_SIZE: usize = 4096;

/// Maximum number of pages a table may allocate
pub const TABLE_MAX_PAGES: usize = 100;

/// Maximum text length accepted for the username column, in bytes
pub const COLUMN_USERNAME_SIZE: usize = 32;

/// Maximum text length accepted for the email column, in bytes
pub const COLUMN_EMAIL_SIZE: usize = 255;

/// Width of the id column in a serialized row
pub const ID_SIZE: usize = std::mem::size_of::<u32>();
