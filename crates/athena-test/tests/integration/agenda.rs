//! Text agenda of a calendar file.

use athena_test::fixtures::COURSE_CALENDAR;

use super::helpers::{Workspace, arg, athena};

#[test_log::test]
fn agenda_lists_events_by_day() {
    let ws = Workspace::new();
    let input = ws.write("course.ics", COURSE_CALENDAR);

    let out = athena(&["agenda", arg(&input)]).expect("should render agenda");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Mekanik HT23");
    assert_eq!(lines[1], "");
    assert_eq!(
        lines[2],
        format!("Mon, 28 Aug  10:15  12:00  {:20}  Föreläsning 1", "Sal A")
    );
    assert_eq!(lines[3], "");
    assert_eq!(
        lines[4],
        format!("Tue, 05 Sep  10:15  12:00  {:20}  Övning 1", "")
    );
    assert_eq!(lines[5], "");
    assert!(lines[6].starts_with("Tue, 31 Oct  10:15  12:00"));
}

#[test_log::test]
fn agenda_follows_the_shifted_calendar() {
    let ws = Workspace::new();
    let input = ws.write("old.ics", COURSE_CALENDAR);
    let output = ws.path("new.ics");

    athena(&["shift", arg(&input), "26.08.2024", arg(&output)]).expect("should shift");
    let out = athena(&["agenda", arg(&output)]).expect("should render agenda");

    assert!(out.contains("Mon, 26 Aug  10:15  12:00"));
    assert!(out.contains("Tue, 03 Sep  10:15  12:00"));
    assert!(out.contains("Tue, 29 Oct  10:15  12:00"));
}
