//! Splitting `/body/flags` regular expression literals.

use itertools::Itertools;

use crate::options::Options;

const KNOWN_FLAGS: &str = "dgimsuy";

/// Errors that can occur while splitting a regular expression literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    MissingOpeningSlash,
    MissingClosingSlash,
    UnknownFlag(char),
    DuplicateFlag(char),
}

impl std::fmt::Display for LiteralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOpeningSlash => write!(f, "Literal does not start with '/'"),
            Self::MissingClosingSlash => write!(f, "Literal has no closing '/'"),
            Self::UnknownFlag(c) => write!(f, "Unknown flag in literal: {c:?}"),
            Self::DuplicateFlag(c) => write!(f, "Flag given more than once: {c:?}"),
        }
    }
}

impl std::error::Error for LiteralError {}

/// A regular expression literal split into its pattern and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexLiteral<'a> {
    pub pattern: &'a str,
    pub flags: &'a str,
}

impl RegexLiteral<'_> {
    pub fn is_unicode(&self) -> bool {
        self.flags.contains('u')
    }

    /// `base` with the mode selected by the flags.
    pub fn options(&self, base: Options) -> Options {
        base.unicode(self.is_unicode())
    }
}

/// Split `/body/flags` at the first and last `/`.
///
/// The body is not checked here; pass [`RegexLiteral::pattern`] to
/// [`accept`](crate::accept) for that.
pub fn parse_literal(literal: &str) -> Result<RegexLiteral<'_>, LiteralError> {
    let rest = literal
        .strip_prefix('/')
        .ok_or(LiteralError::MissingOpeningSlash)?;
    let (pattern, flags) = rest
        .rsplit_once('/')
        .ok_or(LiteralError::MissingClosingSlash)?;
    if let Some(unknown) = flags.chars().find(|&c| !KNOWN_FLAGS.contains(c)) {
        return Err(LiteralError::UnknownFlag(unknown));
    }
    if let Some(repeated) = flags.chars().duplicates().next() {
        return Err(LiteralError::DuplicateFlag(repeated));
    }
    Ok(RegexLiteral { pattern, flags })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        let literal = parse_literal("/a|b/gu").unwrap();
        assert_eq!(literal.pattern, "a|b");
        assert_eq!(literal.flags, "gu");
        assert!(literal.is_unicode());
    }

    #[test]
    fn test_slash_in_body() {
        let literal = parse_literal("/a\\/b/").unwrap();
        assert_eq!(literal.pattern, "a\\/b");
        assert_eq!(literal.flags, "");
        assert!(!literal.is_unicode());
    }

    #[test]
    fn test_empty_body() {
        let literal = parse_literal("//i").unwrap();
        assert_eq!(literal.pattern, "");
        assert_eq!(literal.flags, "i");
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_literal("a/"), Err(LiteralError::MissingOpeningSlash));
        assert_eq!(parse_literal(""), Err(LiteralError::MissingOpeningSlash));
        assert_eq!(parse_literal("/abc"), Err(LiteralError::MissingClosingSlash));
        assert_eq!(parse_literal("/a/x"), Err(LiteralError::UnknownFlag('x')));
        assert_eq!(parse_literal("/a/gig"), Err(LiteralError::DuplicateFlag('g')));
    }

    #[test]
    fn test_options() {
        let base = Options::new().max_nesting(3);
        let options = parse_literal("/x/u").unwrap().options(base);
        assert!(options.is_unicode());
        assert_eq!(options.nesting_limit(), 3);
        assert!(!parse_literal("/x/").unwrap().options(options).is_unicode());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LiteralError::UnknownFlag('x').to_string(),
            "Unknown flag in literal: 'x'"
        );
    }
}
