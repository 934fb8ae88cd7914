//! Output formats for extracted lessons and course calendars.
//!
//! - `console`: fixed-width listing
//! - `sheet`: spreadsheet layouts and the `.xlsx` writer
//! - `calendar`: iCalendar export and the text agenda of an ICS file

pub mod calendar;
pub mod console;
pub mod error;
pub mod sheet;
mod week;

pub use calendar::{CalendarOptions, render_agenda, render_ics};
pub use console::render_console;
pub use error::{RenderError, RenderResult};
pub use sheet::{IulianaOptions, Sheet, iuliana_sheet, lessons_sheet, write_xlsx};
