//! Sample inputs.

/// A two-week plan export, out of order, with UTC timestamps.
///
/// In Europe/Stockholm the lessons fall on Mon 15 Jan 09:00, Wed 17 Jan
/// 13:15 and Mon 22 Jan 08:00. The fourth lesson has no usable start.
pub const COURSE_PLAN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plan>
  <lesson>
    <name>Exam</name>
    <start>2024-01-22T07:00:00</start>
    <stop>2024-01-22T11:00:00</stop>
    <room>Hall</room>
  </lesson>
  <lesson>
    <name>Intro</name>
    <start>2024-01-15T08:00:00</start>
    <stop>2024-01-15T09:00:00</stop>
    <room>A101</room>
    <teacher>Dr. X</teacher>
  </lesson>
  <lesson>
    <name>Lab &amp; tools</name>
    <objectives><name>Not a lesson name</name></objectives>
    <description>Bring a laptop</description>
    <start>2024-01-17T12:15:00</start>
    <stop>2024-01-17T14:00:00</stop>
    <location>Lab 2</location>
    <custom colName="Teacher">Dr. Y</custom>
  </lesson>
  <lesson>
    <name>Guest lecture</name>
    <start>TBA</start>
  </lesson>
</plan>
"#;

/// A course calendar one year before the shifted target.
///
/// Holds a zoned event, a UTC event and a zoned event after the autumn
/// DST change.
pub const COURSE_CALENDAR: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar 1.0//EN\r\n\
X-WR-CALNAME:Mekanik HT23\r\n\
BEGIN:VEVENT\r\n\
UID:lesson-1@example.com\r\n\
DTSTAMP:20230801T120000Z\r\n\
DTSTART;TZID=Europe/Stockholm:20230828T101500\r\n\
DTEND;TZID=Europe/Stockholm:20230828T120000\r\n\
SUMMARY:Föreläsning 1\r\n\
LOCATION:Sal A\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:lesson-2@example.com\r\n\
DTSTAMP:20230801T120000Z\r\n\
DTSTART:20230905T081500Z\r\n\
DTEND:20230905T100000Z\r\n\
SUMMARY:Övning 1\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:lesson-3@example.com\r\n\
DTSTAMP:20230801T120000Z\r\n\
DTSTART;TZID=Europe/Stockholm:20231031T101500\r\n\
DTEND;TZID=Europe/Stockholm:20231031T120000\r\n\
SUMMARY:Föreläsning 9\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
