//! iCalendar components (RFC 5545 §3.4-3.6).

use super::Property;

/// Component kinds that appear in course calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Calendar,
    Event,
    Todo,
    Timezone,
    Standard,
    Daylight,
    Alarm,
    /// Anything else, including X-components. The name is kept on the
    /// component itself.
    Unknown,
}

impl ComponentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Timezone => "VTIMEZONE",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Alarm => "VALARM",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a component name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTODO" => Self::Todo,
            "VTIMEZONE" => Self::Timezone,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            "VALARM" => Self::Alarm,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An iCalendar component with its properties and nested components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Name as written in the BEGIN line (uppercase).
    pub name: String,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested components in order of appearance.
    pub children: Vec<Component>,
}

impl Component {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self::named(kind.as_str())
    }

    /// Creates a component from its BEGIN name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        let name = name.to_ascii_uppercase();
        Self {
            kind: ComponentKind::parse(&name),
            name,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Replaces the first property with the same name, or appends it.
    pub fn set_property(&mut self, prop: Property) {
        match self
            .properties
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(&prop.name))
        {
            Some(existing) => *existing = prop,
            None => self.properties.push(prop),
        }
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn property_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the decoded TEXT value of the first property with the given name.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        self.property(name).map(Property::as_text)
    }

    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.text("SUMMARY")
    }

    #[must_use]
    pub fn location(&self) -> Option<String> {
        self.text("LOCATION")
    }

    /// Returns direct children of the given kind.
    pub fn children_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.children.iter().filter(move |c| c.kind == kind)
    }
}

/// A complete iCalendar document: one VCALENDAR root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    pub root: Component,
}

impl ICalendar {
    /// Creates an empty calendar with VERSION, PRODID and CALSCALE set.
    #[must_use]
    pub fn new(prodid: &str) -> Self {
        let mut root = Component::new(ComponentKind::Calendar);
        root.add_property(Property::raw("VERSION", "2.0"));
        root.add_property(Property::text("PRODID", prodid));
        root.add_property(Property::raw("CALSCALE", "GREGORIAN"));
        Self { root }
    }

    #[must_use]
    pub fn prodid(&self) -> Option<String> {
        self.root.text("PRODID")
    }

    /// Returns `X-WR-CALNAME` if present.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.root.text("X-WR-CALNAME")
    }

    /// Returns `X-WR-CALDESC` if present.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.root.text("X-WR-CALDESC")
    }

    pub fn add_event(&mut self, event: Component) {
        self.root.children.push(event);
    }

    /// Returns all VEVENT components in document order.
    pub fn events(&self) -> impl Iterator<Item = &Component> {
        self.root.children_of_kind(ComponentKind::Event)
    }

    pub fn events_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.root
            .children
            .iter_mut()
            .filter(|c| c.kind == ComponentKind::Event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_kind_parse() {
        assert_eq!(ComponentKind::parse("VEVENT"), ComponentKind::Event);
        assert_eq!(ComponentKind::parse("vtimezone"), ComponentKind::Timezone);
        assert_eq!(ComponentKind::parse("X-COURSE"), ComponentKind::Unknown);
    }

    #[test]
    fn named_keeps_unknown_names() {
        let component = Component::named("x-course");
        assert_eq!(component.kind, ComponentKind::Unknown);
        assert_eq!(component.name, "X-COURSE");
    }

    #[test]
    fn new_calendar_has_required_properties() {
        let ical = ICalendar::new("-//Test//Test//EN");
        assert_eq!(ical.root.text("VERSION").as_deref(), Some("2.0"));
        assert_eq!(ical.prodid().as_deref(), Some("-//Test//Test//EN"));
        assert_eq!(ical.root.text("CALSCALE").as_deref(), Some("GREGORIAN"));
        assert_eq!(ical.name(), None);
    }

    #[test]
    fn set_property_replaces_first_match() {
        let mut event = Component::event();
        event.add_property(Property::raw("DTSTAMP", "20200101T000000Z"));
        event.set_property(Property::raw("dtstamp", "20240101T000000Z"));
        event.set_property(Property::text("SUMMARY", "Intro"));

        assert_eq!(event.properties.len(), 2);
        assert_eq!(
            event.property("DTSTAMP").map(|p| p.value.as_str()),
            Some("20240101T000000Z")
        );
        assert_eq!(event.summary().as_deref(), Some("Intro"));
    }

    #[test]
    fn events_skip_other_components() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        ical.root.children.push(Component::new(ComponentKind::Timezone));
        ical.add_event(Component::event());
        ical.add_event(Component::event());

        assert_eq!(ical.events().count(), 2);
        assert_eq!(ical.events_mut().count(), 2);
    }
}
