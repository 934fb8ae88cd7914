//! iCalendar document model.
//!
//! Property values are kept in their raw, escaped wire form so that a
//! parsed document serializes back without loss.

mod component;
mod parameter;
mod property;

pub use component::{Component, ComponentKind, ICalendar};
pub use parameter::Parameter;
pub use property::Property;
