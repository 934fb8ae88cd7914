//! Spreadsheet output.
//!
//! Layouts are built as a plain [`Sheet`] first and only then written as
//! `.xlsx`, so every layout rule can be checked without opening a workbook.

mod generic;
mod iuliana;
mod xlsx;

pub use generic::lessons_sheet;
pub use iuliana::{IulianaOptions, iuliana_sheet};
pub use xlsx::write_xlsx;

/// How a row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Bold column titles.
    Header,
    Body,
    /// A body row with a rule above it, marking the first row of a new week.
    WeekStart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub cells: Vec<String>,
    pub style: RowStyle,
}

impl SheetRow {
    #[must_use]
    pub fn header(titles: &[&str]) -> Self {
        Self {
            cells: titles.iter().map(ToString::to_string).collect(),
            style: RowStyle::Header,
        }
    }

    #[must_use]
    pub const fn body(cells: Vec<String>) -> Self {
        Self {
            cells,
            style: RowStyle::Body,
        }
    }

    #[must_use]
    pub const fn blank() -> Self {
        Self::body(Vec::new())
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }
}

/// A single worksheet: a name, column widths and rows from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    /// Column widths in character units, from the first column.
    pub widths: Vec<f64>,
    pub rows: Vec<SheetRow>,
}
