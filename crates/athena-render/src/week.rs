use chrono::Datelike;

/// Detects week boundaries in a start-ordered sequence.
///
/// A new week starts whenever the ISO weekday number drops below the
/// previous one. The tracker starts at Monday, so the first lesson never
/// opens a new week.
#[derive(Debug)]
pub(crate) struct WeekTracker {
    last: u32,
}

impl WeekTracker {
    pub(crate) const fn new() -> Self {
        Self { last: 1 }
    }

    /// Records `date` and returns whether it starts a new week.
    pub(crate) fn advance(&mut self, date: &impl Datelike) -> bool {
        let weekday = date.weekday().number_from_monday();
        let new_week = weekday < self.last;
        self.last = weekday;
        new_week
    }
}
