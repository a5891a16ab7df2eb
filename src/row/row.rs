use std::fmt;

use bytes::{Buf, BufMut};

use super::RowLayout;

/// One logical record: an id plus two fixed-capacity text columns.
///
/// A `Row` that reaches the codec is assumed to be pre-validated by the
/// statement layer (id in range, text within column capacity); serialization
/// does no validation of its own beyond asserting the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    /// Packs this row into `slot` at the layout's fixed offsets.
    ///
    /// The slot must be exactly `layout.row_size()` bytes and the text
    /// fields must fit their stored widths; both are caller contracts and
    /// violations panic. Text shorter than its field is zero-padded, so the
    /// output is deterministic for equal rows.
    pub fn serialize(&self, layout: &RowLayout, slot: &mut [u8]) {
        assert_eq!(slot.len(), layout.row_size(), "slot is not one row wide");
        assert!(
            self.username.len() <= layout.username_width(),
            "username exceeds its stored width"
        );
        assert!(
            self.email.len() <= layout.email_width(),
            "email exceeds its stored width"
        );

        let mut buf = &mut slot[..];
        buf.put_u32_le(self.id);
        buf.put_slice(self.username.as_bytes());
        buf.put_bytes(0, layout.username_width() - self.username.len());
        buf.put_slice(self.email.as_bytes());
        buf.put_bytes(0, layout.email_width() - self.email.len());
    }

    /// Unpacks a row from `slot`, the inverse of [`Row::serialize`].
    ///
    /// Text fields are read up to their first NUL byte, or the full stored
    /// width if none is present (a packed-layout field filled to capacity).
    pub fn deserialize(layout: &RowLayout, slot: &[u8]) -> Self {
        assert_eq!(slot.len(), layout.row_size(), "slot is not one row wide");

        let mut buf = slot;
        let id = buf.get_u32_le();
        let username = read_text(&buf[..layout.username_width()]);
        buf.advance(layout.username_width());
        let email = read_text(&buf[..layout.email_width()]);

        Self {
            id,
            username,
            email,
        }
    }
}

fn read_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}
