//! Plan export to console, spreadsheet and calendar output.

use athena_ical::{DateValue, parse};
use athena_test::fixtures::COURSE_PLAN;

use super::helpers::{Workspace, arg, athena};

#[test_log::test]
fn list_prints_lessons_in_order_with_week_breaks() {
    let ws = Workspace::new();
    let plan = ws.write("plan.xml", COURSE_PLAN);

    let out = athena(&["list", arg(&plan)]).expect("should list");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("2024-01-15 Mon    09:00-10:00 Intro "));
    assert!(lines[0].contains("Dr. X"));
    assert!(lines[1].starts_with("2024-01-17 Wed    13:15-15:00 Lab & tools "));
    assert!(lines[1].contains("Dr. Y"));
    assert!(lines[1].contains("Lab 2"));
    assert_eq!(lines[2], "");
    assert!(lines[3].starts_with("2024-01-22 Mon    08:00-12:00 Exam "));
    assert!(lines[4].starts_with(&format!("{} Guest lecture", " ".repeat(29))));
}

#[test_log::test]
fn strict_mode_rejects_the_plan() {
    let ws = Workspace::new();
    let plan = ws.write("plan.xml", COURSE_PLAN);

    let err = athena(&["list", "--strict", arg(&plan)]).expect_err("should fail");
    assert!(format!("{err:#}").contains("TBA"));
}

#[test_log::test]
fn timezone_flag_moves_local_times() {
    let ws = Workspace::new();
    let plan = ws.write("plan.xml", COURSE_PLAN);

    let out = athena(&["list", "--timezone", "UTC", arg(&plan)]).expect("should list");
    assert!(out.starts_with("2024-01-15 Mon    08:00-09:00 Intro "));
}

#[test_log::test]
fn configured_timezone_is_used_without_flag() {
    let ws = Workspace::new();
    let plan = ws.write("plan.xml", COURSE_PLAN);
    let config = ws.write("athena.toml", "timezone = \"UTC\"\n");

    let out = athena(&["list", "--config", arg(&config), arg(&plan)]).expect("should list");
    assert!(out.starts_with("2024-01-15 Mon    08:00-09:00 Intro "));

    let out = athena(&[
        "list",
        "--config",
        arg(&config),
        "--timezone",
        "Europe/Stockholm",
        arg(&plan),
    ])
    .expect("should list");
    assert!(out.starts_with("2024-01-15 Mon    09:00-10:00 Intro "));
}

#[test_log::test]
fn unknown_configured_timezone_is_an_error() {
    let ws = Workspace::new();
    let plan = ws.write("plan.xml", COURSE_PLAN);
    let config = ws.write("athena.toml", "timezone = \"Mars/Olympus\"\n");

    let err = athena(&["list", "--config", arg(&config), arg(&plan)]).expect_err("should fail");
    assert!(format!("{err:#}").contains("Mars/Olympus"));
}

#[test_log::test]
fn unknown_timezone_is_an_error() {
    let ws = Workspace::new();
    let plan = ws.write("plan.xml", COURSE_PLAN);

    assert!(athena(&["list", "--timezone", "Mars/Olympus", arg(&plan)]).is_err());
}

#[test_log::test]
fn missing_plan_is_an_error() {
    let ws = Workspace::new();
    let err = athena(&["list", arg(&ws.path("nope.xml"))]).expect_err("should fail");
    assert!(format!("{err:#}").contains("nope.xml"));
}

#[test_log::test]
fn spreadsheets_are_written() {
    let ws = Workspace::new();
    let plan = ws.write("plan.xml", COURSE_PLAN);
    let lessons = ws.path("lessons.xlsx");
    let schema = ws.path("schema.xlsx");

    let out = athena(&["sheet", arg(&plan), "-o", arg(&lessons)]).expect("should write sheet");
    assert!(out.is_empty());

    let out = athena(&[
        "iuliana",
        arg(&plan),
        "-o",
        arg(&schema),
        "--course-name",
        "Mekanik",
        "--course-code",
        "TME055",
        "--echo",
    ])
    .expect("should write schema");
    assert!(out.contains("Intro"));

    for path in [lessons, schema] {
        let bytes = std::fs::read(&path).expect("should read workbook");
        // xlsx files are zip archives
        assert!(bytes.starts_with(b"PK"), "{} is not a zip", path.display());
    }
}

#[test_log::test]
fn ics_export_round_trips_through_the_parser() {
    let ws = Workspace::new();
    let plan = ws.write("plan.xml", COURSE_PLAN);

    let out = athena(&["ics", arg(&plan), "--name", "Mekanik VT24"]).expect("should export");
    let ical = parse(&out).expect("exported calendar should parse");

    assert_eq!(ical.name().as_deref(), Some("Mekanik VT24"));
    let events: Vec<_> = ical.events().collect();
    assert_eq!(events.len(), 3);

    let first = events[0];
    assert_eq!(first.summary().as_deref(), Some("Intro"));
    assert_eq!(first.location().as_deref(), Some("A101"));
    let start = DateValue::from_property(first.property("DTSTART").expect("has DTSTART"))
        .expect("should parse DTSTART");
    assert_eq!(start.to_raw(), "20240115T080000Z");

    let lab = events[1];
    assert_eq!(lab.summary().as_deref(), Some("Lab & tools"));
    assert_eq!(lab.text("DESCRIPTION").as_deref(), Some("Bring a laptop"));
    assert_eq!(lab.text("CONTACT").as_deref(), Some("Dr. Y"));
}

#[test_log::test]
fn ics_uids_are_stable_between_runs() {
    let ws = Workspace::new();
    let plan = ws.write("plan.xml", COURSE_PLAN);
    let output = ws.path("course.ics");

    let uids = || {
        athena(&["ics", arg(&plan), "-o", arg(&output)]).expect("should export");
        let text = std::fs::read_to_string(&output).expect("should read export");
        let ical = parse(&text).expect("should parse");
        ical.events()
            .map(|e| e.property("UID").expect("has UID").value.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(uids(), uids());
}
