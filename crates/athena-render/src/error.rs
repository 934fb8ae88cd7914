use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Sheet has too many {0}")]
    SheetTooLarge(&'static str),

    #[error("Calendar value error: {0}")]
    Calendar(#[from] athena_ical::ConversionError),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
