//! iCalendar output.

mod agenda;
mod export;

pub use agenda::render_agenda;
pub use export::{CalendarOptions, lessons_calendar, render_ics};
