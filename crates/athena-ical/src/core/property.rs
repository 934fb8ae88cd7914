use super::Parameter;
use crate::build::escape_text;
use crate::parse::unescape_text;

/// A content line: name, parameters and raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value exactly as it appears after the colon, still escaped.
    pub value: String,
}

impl Property {
    /// Creates a property from an already encoded value.
    #[must_use]
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Creates a TEXT property, escaping the value.
    #[must_use]
    pub fn text(name: impl Into<String>, text: &str) -> Self {
        Self::raw(name, escape_text(text))
    }

    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.param(name)?.value()
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.param_value("TZID")
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.param_value("VALUE")
    }

    /// Returns the value decoded as TEXT.
    #[must_use]
    pub fn as_text(&self) -> String {
        unescape_text(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_stored_escaped() {
        let prop = Property::text("summary", "Lab; part 1, group A");
        assert_eq!(prop.name, "SUMMARY");
        assert_eq!(prop.value, r"Lab\; part 1\, group A");
        assert_eq!(prop.as_text(), "Lab; part 1, group A");
    }

    #[test]
    fn params_are_case_insensitive() {
        let prop = Property::raw("DTSTART", "20240115T100000")
            .with_param(Parameter::new("TZID", "Europe/Stockholm"));

        assert_eq!(prop.tzid(), Some("Europe/Stockholm"));
        assert_eq!(prop.param_value("tzid"), Some("Europe/Stockholm"));
        assert_eq!(prop.value_type(), None);
    }
}
