//! Recognized lesson fields and their tag-name aliases.

use std::fmt;

/// A lesson field that character data can be written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Start,
    Stop,
    Room,
    Teacher,
}

/// Tag (or `colName`) to field mapping. Matching is case-sensitive.
pub const FIELD_ALIASES: &[(&str, Field)] = &[
    ("name", Field::Name),
    ("description", Field::Description),
    ("start", Field::Start),
    ("stop", Field::Stop),
    ("room", Field::Room),
    ("location", Field::Room),
    ("teacher", Field::Teacher),
];

impl Field {
    /// Looks a tag name up in [`FIELD_ALIASES`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        FIELD_ALIASES
            .iter()
            .find(|(alias, _)| *alias == tag)
            .map(|&(_, field)| field)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Room => "room",
            Self::Teacher => "teacher",
        }
    }

    /// Whether values of this field are timestamps.
    #[must_use]
    pub const fn is_timestamp(self) -> bool {
        matches!(self, Self::Start | Self::Stop)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
