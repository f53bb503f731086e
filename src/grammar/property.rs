//! The `…` of `\p{…}` and `\P{…}`.

use crate::production::Production;
use crate::state::RecognizerState;
use crate::unicode::properties::{is_lone_value, is_valid_value, resolve_alias};

/// Properties that take a value and so cannot be written alone.
const NON_BINARY_PROPERTY_NAMES: [&str; 6] = [
    "General_Category",
    "gc",
    "Script",
    "sc",
    "Script_Extensions",
    "scx",
];

impl RecognizerState {
    /// `Name=Value`, or a lone binary property or General_Category value.
    pub(super) fn property_value_expression(&mut self) -> Production {
        self.any_of(&[
            |s| s.backtrack(Self::property_name_and_value),
            |s| s.backtrack(Self::lone_property_name_or_value),
        ])
    }

    fn property_name_and_value(&mut self) -> Production {
        let Some(name) = self.property_text(|b| b.is_ascii_alphabetic() || b == b'_') else {
            return Production::NoMatch;
        };
        if !self.cursor.eat("=") {
            return Production::NoMatch;
        }
        let Some(value) = self.property_value() else {
            return Production::NoMatch;
        };
        let property = resolve_alias(&name).unwrap_or(name.as_str());
        let valid = is_valid_value(property, &value);
        if !valid {
            log::trace!("{value:?} is not a value of {property:?}");
        }
        Production::from(valid)
    }

    fn lone_property_name_or_value(&mut self) -> Production {
        let Some(value) = self.property_value() else {
            return Production::NoMatch;
        };
        if NON_BINARY_PROPERTY_NAMES.contains(&value.as_str()) {
            return Production::NoMatch;
        }
        Production::from(is_lone_value(&value))
    }

    fn property_value(&mut self) -> Option<String> {
        self.property_text(|b| b.is_ascii_alphanumeric() || b == b'_')
    }

    fn property_text(&mut self, accepted: impl Fn(u8) -> bool) -> Option<String> {
        let mut text = String::new();
        while let Some(b) = self.cursor.eat_ascii_if(&accepted) {
            text.push(char::from(b));
        }
        if text.is_empty() { None } else { Some(text) }
    }
}
