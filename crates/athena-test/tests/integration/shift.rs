//! Moving a course calendar to a new start date.

use athena_ical::{ICalendar, parse};
use athena_test::fixtures::COURSE_CALENDAR;

use super::helpers::{Workspace, arg, athena};

fn values(ical: &ICalendar, name: &str) -> Vec<String> {
    ical.events()
        .map(|e| e.property(name).expect("event has the property").value.clone())
        .collect()
}

#[test_log::test]
fn shift_moves_the_course_to_the_new_start_date() {
    let ws = Workspace::new();
    let input = ws.write("old.ics", COURSE_CALENDAR);
    let output = ws.path("new.ics");

    let report =
        athena(&["shift", arg(&input), "26.08.2024", arg(&output)]).expect("should shift");
    assert_eq!(
        report.trim_end(),
        "Moved 3 events by 364 days: first lesson 2023-08-28 10:15 is now 2024-08-26 10:15"
    );

    let text = std::fs::read_to_string(&output).expect("should read output");
    assert!(text.contains("DTSTART;TZID=Europe/Stockholm:20240826T101500\r\n"));

    let shifted = parse(&text).expect("output should parse");
    assert_eq!(
        values(&shifted, "DTSTART"),
        ["20240826T101500", "20240903T081500Z", "20241029T101500"]
    );
    assert_eq!(
        values(&shifted, "DTEND"),
        ["20240826T120000", "20240903T100000Z", "20241029T120000"]
    );
    assert!(
        values(&shifted, "DTSTAMP")
            .iter()
            .all(|stamp| stamp != "20230801T120000Z")
    );
    assert_eq!(
        values(&shifted, "UID"),
        [
            "lesson-1@example.com",
            "lesson-2@example.com",
            "lesson-3@example.com"
        ]
    );
    assert_eq!(shifted.name().as_deref(), Some("Mekanik HT23"));
}

#[test_log::test]
fn malformed_start_date_is_rejected() {
    let ws = Workspace::new();
    let input = ws.write("old.ics", COURSE_CALENDAR);
    let output = ws.path("new.ics");

    let err = athena(&["shift", arg(&input), "2024-08-26", arg(&output)])
        .expect_err("should fail");
    assert!(format!("{err:#}").contains("2024-08-26"));
    assert!(!output.exists());
}

#[test_log::test]
fn calendar_without_events_is_rejected() {
    let ws = Workspace::new();
    let input = ws.write(
        "empty.ics",
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n",
    );
    let output = ws.path("new.ics");

    assert!(athena(&["shift", arg(&input), "26.08.2024", arg(&output)]).is_err());
    assert!(!output.exists());
}
