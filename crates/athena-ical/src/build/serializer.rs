//! Document serializer.
//!
//! Properties and components are written in the order they are stored.
//! Values are written raw, so parsed documents keep their exact encoding.

use super::escape::escape_param_value;
use super::fold::fold_line;
use crate::core::{Component, ICalendar, Property};

/// Serializes a calendar to CRLF-terminated, folded text.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    serialize_component(&ical.root)
}

#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut out = String::new();
    write_component(&mut out, component);
    out
}

fn write_component(out: &mut String, component: &Component) {
    out.push_str(&fold_line(&format!("BEGIN:{}", component.name)));
    for prop in &component.properties {
        out.push_str(&serialize_property(prop));
    }
    for child in &component.children {
        write_component(out, child);
    }
    out.push_str(&fold_line(&format!("END:{}", component.name)));
}

/// Serializes one property as a folded content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();
    for param in &prop.params {
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        let values: Vec<String> = param.values.iter().map(|v| escape_param_value(v)).collect();
        line.push_str(&values.join(","));
    }
    line.push(':');
    line.push_str(&prop.value);
    fold_line(&line)
}
