mod page;
mod table;

pub use page::Page;
pub use table::{Scan, Table};
