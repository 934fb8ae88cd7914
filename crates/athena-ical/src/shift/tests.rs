use chrono::{Datelike, TimeZone, Timelike};

use super::*;
use crate::build::serialize;
use crate::parse::parse;

const STOCKHOLM: Tz = Tz::Europe__Stockholm;

const COURSE: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
X-WR-CALNAME:Physics 1\r\n\
BEGIN:VEVENT\r\n\
UID:b\r\n\
DTSTAMP:20230101T000000Z\r\n\
DTSTART:20230828T070000Z\r\n\
DTEND:20230828T090000Z\r\n\
SUMMARY:Lab\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:a\r\n\
DTSTAMP:20230101T000000Z\r\n\
DTSTART;TZID=Europe/Stockholm:20230821T091500\r\n\
DTEND;TZID=Europe/Stockholm:20230821T110000\r\n\
SUMMARY:Intro\r\n\
LOCATION:A101\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:c\r\n\
DTSTART;VALUE=DATE:20231030\r\n\
SUMMARY:Exam week\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0)
        .single()
        .expect("valid")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid")
}

fn value(ical: &ICalendar, uid: &str, name: &str) -> String {
    ical.events()
        .find(|e| e.property("UID").is_some_and(|p| p.value == uid))
        .and_then(|e| e.property(name))
        .map(|p| p.value.clone())
        .expect("property should exist")
}

#[test]
fn parse_date_formats() {
    assert_eq!(parse_shift_date("19.08.2024").expect("ok"), date(2024, 8, 19));
    assert!(matches!(
        parse_shift_date("2024-08-19"),
        Err(ShiftError::InvalidStartDate { .. })
    ));
    assert!(parse_shift_date("31.02.2024").is_err());
}

#[test_log::test]
fn earliest_event_lands_on_new_date() {
    let mut ical = parse(COURSE).expect("should parse");
    let report =
        shift_course(&mut ical, date(2024, 8, 19), STOCKHOLM, now()).expect("should shift");

    assert_eq!(report.old_start.date_naive(), date(2023, 8, 21));
    assert_eq!(report.delta_days, 364);
    assert_eq!(report.new_start.date_naive(), date(2024, 8, 19));
    assert_eq!(
        (report.new_start.hour(), report.new_start.minute()),
        (9, 15)
    );
    assert_eq!(report.shifted, 3);

    assert_eq!(value(&ical, "a", "DTSTART"), "20240819T091500");
    assert_eq!(value(&ical, "a", "DTEND"), "20240819T110000");
    assert_eq!(value(&ical, "b", "DTSTART"), "20240826T070000Z");
    assert_eq!(value(&ical, "c", "DTSTART"), "20241028");
}

#[test]
fn utc_events_keep_local_time_across_dst() {
    let mut ical = parse(COURSE).expect("should parse");
    // Lab is 09:00 local in summer (+02). Moved into winter it must still
    // be 09:00 local, which is 08:00Z.
    shift_course(&mut ical, date(2024, 1, 15), STOCKHOLM, now()).expect("should shift");

    assert_eq!(value(&ical, "b", "DTSTART"), "20240122T080000Z");
    assert_eq!(value(&ical, "b", "DTEND"), "20240122T100000Z");
}

#[test]
fn stamps_are_replaced_and_added() {
    let mut ical = parse(COURSE).expect("should parse");
    shift_course(&mut ical, date(2024, 8, 19), STOCKHOLM, now()).expect("should shift");

    for uid in ["a", "b", "c"] {
        assert_eq!(value(&ical, uid, "DTSTAMP"), "20240110T120000Z");
    }
    let stamps = ical
        .events()
        .flat_map(|e| e.properties.iter())
        .filter(|p| p.name == "DTSTAMP")
        .count();
    assert_eq!(stamps, 3);
}

#[test]
fn other_content_passes_through() {
    let mut ical = parse(COURSE).expect("should parse");
    shift_course(&mut ical, date(2024, 8, 19), STOCKHOLM, now()).expect("should shift");
    let out = serialize(&ical);

    assert!(out.contains("X-WR-CALNAME:Physics 1\r\n"));
    assert!(out.contains("DTSTART;TZID=Europe/Stockholm:20240819T091500\r\n"));
    assert!(out.contains("DTSTART;VALUE=DATE:20241028\r\n"));
    assert!(out.contains("LOCATION:A101\r\n"));
    let order: Vec<_> = ical
        .events()
        .filter_map(|e| e.property("UID").map(|p| p.value.clone()))
        .collect();
    assert_eq!(order, ["b", "a", "c"]);
}

#[test]
fn backward_shift() {
    let mut ical = parse(COURSE).expect("should parse");
    let report =
        shift_course(&mut ical, date(2023, 1, 16), STOCKHOLM, now()).expect("should shift");

    assert!(report.delta_days < 0);
    assert_eq!(report.new_start.date_naive(), date(2023, 1, 16));
    assert_eq!(report.new_start.weekday(), chrono::Weekday::Mon);
}

#[test]
fn no_events_is_an_error() {
    let mut ical =
        parse("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n").expect("should parse");
    assert!(matches!(
        shift_course(&mut ical, date(2024, 8, 19), STOCKHOLM, now()),
        Err(ShiftError::NoEvents)
    ));
}

#[test]
fn bad_value_leaves_calendar_untouched() {
    let input = COURSE.replace("DTEND:20230828T090000Z", "DTEND:not-a-date");
    let mut ical = parse(&input).expect("should parse");
    let before = ical.clone();

    let err =
        shift_course(&mut ical, date(2024, 8, 19), STOCKHOLM, now()).expect_err("should fail");
    assert!(matches!(
        err,
        ShiftError::Value {
            event: 0,
            property: "DTEND",
            ..
        }
    ));
    assert_eq!(ical, before);
}
