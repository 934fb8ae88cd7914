//! Calendar fixtures.

/// A course calendar as exported by a typical calendar client.
pub const COURSE_CALENDAR: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar 1.0//EN\r\n\
CALSCALE:GREGORIAN\r\n\
X-WR-CALNAME:Mekanik HT23\r\n\
X-WR-CALDESC:Föreläsningar\\, övningar och labbar\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Stockholm\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19701025T030000\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:lesson-1@example.com\r\n\
DTSTAMP:20230801T120000Z\r\n\
DTSTART;TZID=Europe/Stockholm:20230828T101500\r\n\
DTEND;TZID=Europe/Stockholm:20230828T120000\r\n\
SUMMARY:Föreläsning 1\\; kinematik\r\n\
LOCATION:Sal A\r\n\
ATTENDEE;CN=\"Nilsson, Anna\":mailto:anna@example.com\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Same content with bare LF endings and folded lines.
pub const FOLDED_LF: &str = "BEGIN:VCALENDAR\n\
VERSION:2.0\n\
BEGIN:VEVENT\n\
UID:folded\n\
DESCRIPTION:Den här beskrivningen är så lång att den måste vikas över fler\n \
a rader enligt standarden\n\
END:VEVENT\n\
END:VCALENDAR\n";
