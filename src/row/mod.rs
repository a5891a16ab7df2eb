mod layout;
mod row;

pub use layout::RowLayout;
pub use row::Row;
