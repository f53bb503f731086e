/// The result of running one grammar production.
///
/// "Matched without a value" and "matched with a value" are distinct: a
/// character class range such as `[\d-x]` depends on telling a valueless
/// class escape apart from a single character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Production {
    NoMatch,
    /// Matched, but stands for no single value (`\d`, a whole group, ...).
    Matched,
    /// Matched a single character with this code point.
    CodePoint(u32),
    /// Matched a group name or a property name.
    Name(String),
}

impl Production {
    pub fn is_match(&self) -> bool {
        !matches!(self, Production::NoMatch)
    }

    pub fn code_point(&self) -> Option<u32> {
        match self {
            Production::CodePoint(code_point) => Some(*code_point),
            _ => None,
        }
    }
}

impl From<bool> for Production {
    fn from(matched: bool) -> Self {
        if matched {
            Production::Matched
        } else {
            Production::NoMatch
        }
    }
}
