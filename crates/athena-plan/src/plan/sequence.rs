use super::Lesson;

/// ## Summary
/// Orders lessons by their raw start string.
///
/// The sort is stable and compares bytes. For the fixed-width export format
/// that is chronological order, and lessons without a start come first.
#[must_use]
pub fn sequence(mut lessons: Vec<Lesson>) -> Vec<Lesson> {
    lessons.sort_by(|a, b| a.start_raw.as_bytes().cmp(b.start_raw.as_bytes()));
    lessons
}
