//! Table shorthand: build a `<table>` from row/column data.
//!
//! ```
//! use weaver_html::table::{HeaderScope, table_from};
//! use weaver_dom::Render;
//!
//! let grid = table_from(
//!     &[&["Name", "Qty"], &["Bolt", "40"]],
//!     Some(HeaderScope::Row),
//! );
//! assert_eq!(
//!     "<table><tr><th>Name</th><th>Qty</th></tr><tr><td>Bolt</td><td>40</td></tr></table>",
//!     grid.display(false)
//! );
//! ```

use weaver_dom::{Element, Tag};

/// Which cells of the data render as `<th>` header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderScope {
    /// The first row.
    Row,
    /// The first column.
    Column,
    /// Both the first row and the first column.
    Both,
}

impl HeaderScope {
    /// Whether the cell at (`row`, `column`) is a header cell under this
    /// scope.
    #[must_use]
    pub const fn is_header(self, row: usize, column: usize) -> bool {
        match self {
            Self::Row => row == 0,
            Self::Column => column == 0,
            Self::Both => row == 0 || column == 0,
        }
    }
}

/// Expands rows of cell text into a `<table>` of `<tr>` rows, wrapping each
/// cell in `<td>` — or `<th>` where `header` says so.
#[must_use]
pub fn table_from<S: AsRef<str>>(rows: &[&[S]], header: Option<HeaderScope>) -> Element {
    let mut table = Element::new(Tag::Table);
    for (row_index, row) in rows.iter().enumerate() {
        let mut tr = Element::new(Tag::Tr);
        for (column_index, cell) in row.iter().enumerate() {
            let tag = match header {
                Some(scope) if scope.is_header(row_index, column_index) => Tag::Th,
                _ => Tag::Td,
            };
            // Cannot fail: neither tr nor the cell tags are void.
            let _ = tr.add(Element::with(tag, (cell.as_ref(),)));
        }
        let _ = table.add(tr);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::{HeaderScope, table_from};
    use weaver_dom::Render;

    #[test]
    fn test_plain_cells_without_header() {
        let grid = table_from(&[&["a", "b"], &["c", "d"]], None);
        assert_eq!(
            "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>",
            grid.display(false)
        );
    }

    #[test]
    fn test_column_and_both_header_scopes() {
        let column = table_from(&[&["k1", "v1"], &["k2", "v2"]], Some(HeaderScope::Column));
        assert_eq!(
            "<table><tr><th>k1</th><td>v1</td></tr><tr><th>k2</th><td>v2</td></tr></table>",
            column.display(false)
        );

        let both = table_from(&[&["", "h"], &["k", "v"]], Some(HeaderScope::Both));
        assert_eq!(
            "<table><tr><th></th><th>h</th></tr><tr><th>k</th><td>v</td></tr></table>",
            both.display(false)
        );
    }
}
