//! `.xlsx` writer for [`Sheet`] layouts.

use rust_xlsxwriter::{ColNum, Format, FormatBorder, RowNum, Workbook};

use super::{RowStyle, Sheet};
use crate::error::{RenderError, RenderResult};

/// Writes a sheet into a new workbook and returns the file bytes.
///
/// ## Errors
/// Returns an error if the layout does not fit a worksheet or the workbook
/// cannot be assembled.
#[tracing::instrument(skip(sheet), fields(name = %sheet.name, rows = sheet.rows.len()))]
pub fn write_xlsx(sheet: &Sheet) -> RenderResult<Vec<u8>> {
    let bold = Format::new().set_bold();
    let overline = Format::new().set_border_top(FormatBorder::Thin);
    let plain = Format::new();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet.name)?;

    for (col, width) in sheet.widths.iter().enumerate() {
        worksheet.set_column_width(col_num(col)?, *width)?;
    }

    let columns = sheet
        .rows
        .iter()
        .map(|r| r.cells.len())
        .chain([sheet.widths.len()])
        .max()
        .unwrap_or_default();

    for (idx, row) in sheet.rows.iter().enumerate() {
        let row_num = RowNum::try_from(idx).map_err(|_e| RenderError::SheetTooLarge("rows"))?;
        let format = match row.style {
            RowStyle::Header => &bold,
            RowStyle::Body => &plain,
            RowStyle::WeekStart => &overline,
        };

        for (col, text) in row.cells.iter().enumerate() {
            if !text.is_empty() {
                worksheet.write_string_with_format(row_num, col_num(col)?, text, format)?;
            }
        }

        // The rule has to span the whole row, not just the filled cells.
        if row.style == RowStyle::WeekStart {
            for col in 0..columns {
                if row.cells.get(col).is_none_or(String::is_empty) {
                    worksheet.write_blank(row_num, col_num(col)?, &overline)?;
                }
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(bytes = bytes.len(), "Workbook written");
    Ok(bytes)
}

fn col_num(col: usize) -> RenderResult<ColNum> {
    ColNum::try_from(col).map_err(|_e| RenderError::SheetTooLarge("columns"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::SheetRow;

    #[test]
    fn writes_a_zip_container() {
        let sheet = Sheet {
            name: "Test".to_string(),
            widths: vec![10.0, 10.0],
            rows: vec![
                SheetRow::header(&["A", "B"]),
                SheetRow::body(vec!["1".to_string(), String::new()]),
                SheetRow::blank(),
                SheetRow {
                    cells: vec!["2".to_string()],
                    style: RowStyle::WeekStart,
                },
            ],
        };

        let bytes = write_xlsx(&sheet).expect("should write");
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn rejects_invalid_sheet_name() {
        let sheet = Sheet {
            name: "bad/name".to_string(),
            widths: Vec::new(),
            rows: Vec::new(),
        };
        assert!(matches!(write_xlsx(&sheet), Err(RenderError::Xlsx(_))));
    }
}
