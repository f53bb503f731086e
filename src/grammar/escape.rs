//! Productions following a `\`, and group names.

use crate::production::Production;
use crate::state::{GroupReference, RecognizerState};
use crate::unicode::ident::{is_identifier_part, is_identifier_start};

use super::{SYNTAX_CHARACTERS, is_one_of, natural_value};

const ZWNJ: u32 = 0x200C;
const ZWJ: u32 = 0x200D;

fn hex_value(digit: u8) -> u32 {
    char::from(digit).to_digit(16).unwrap_or(0)
}

fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

impl RecognizerState {
    /// Everything that may follow `\` outside a character class.
    pub(super) fn atom_escape(&mut self) -> Production {
        self.any_of(&[
            Self::decimal_escape,
            Self::character_class_escape,
            Self::character_escape,
            Self::named_backreference,
        ])
    }

    /// `\0`, or a number that is a backreference or a legacy octal escape.
    ///
    /// Which of the two cannot be known until every group has been counted,
    /// so the number is only recorded here.
    fn decimal_escape(&mut self) -> Production {
        self.backtrack(|s| {
            let Some(first) = s.cursor.eat_ascii_if(|b| b.is_ascii_digit()) else {
                return Production::NoMatch;
            };
            if first == b'0' {
                return Production::CodePoint(0);
            }
            let mut digits = String::from(char::from(first));
            if let Some(rest) = s.cursor.eat_natural_number() {
                digits.push_str(&rest);
            }
            s.record_backreference(natural_value(&digits));
            Production::Matched
        })
    }

    /// `\d \D \s \S \w \W`, and in Unicode mode `\p{…}` and `\P{…}`.
    ///
    /// These stand for sets of characters, so they match without a value.
    pub(super) fn character_class_escape(&mut self) -> Production {
        if self.cursor.eat_any(&["d", "D", "s", "S", "w", "W"]).is_some() {
            return Production::Matched;
        }
        if !self.unicode {
            return Production::NoMatch;
        }
        self.backtrack(|s| {
            if s.cursor.eat_any(&["p{", "P{"]).is_none()
                || !s.property_value_expression().is_match()
            {
                return Production::NoMatch;
            }
            Production::from(s.cursor.eat("}"))
        })
    }

    /// An escape standing for exactly one character.
    pub(super) fn character_escape(&mut self) -> Production {
        self.any_of(&[
            Self::control_escape,
            Self::control_letter_escape,
            Self::null_escape,
            Self::hex_escape,
            Self::unicode_escape,
            Self::legacy_octal_escape,
            Self::identity_escape,
        ])
    }

    fn control_escape(&mut self) -> Production {
        match self.cursor.eat_any(&["f", "n", "r", "t", "v"]) {
            Some("f") => Production::CodePoint(0x0C),
            Some("n") => Production::CodePoint(0x0A),
            Some("r") => Production::CodePoint(0x0D),
            Some("t") => Production::CodePoint(0x09),
            Some("v") => Production::CodePoint(0x0B),
            _ => Production::NoMatch,
        }
    }

    fn control_letter_escape(&mut self) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("c") {
                return Production::NoMatch;
            }
            match s.cursor.eat_ascii_if(|b| b.is_ascii_alphabetic()) {
                Some(letter) => Production::CodePoint(u32::from(letter) % 32),
                None => Production::NoMatch,
            }
        })
    }

    fn null_escape(&mut self) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("0") || s.cursor.matches_digit() {
                return Production::NoMatch;
            }
            Production::CodePoint(0)
        })
    }

    fn hex_escape(&mut self) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("x") {
                return Production::NoMatch;
            }
            match s.fixed_hex_digits(2) {
                Some(value) => Production::CodePoint(value),
                None => Production::NoMatch,
            }
        })
    }

    fn fixed_hex_digits(&mut self, count: usize) -> Option<u32> {
        (0..count).try_fold(0, |value, _| {
            let digit = self.cursor.eat_ascii_if(|b| b.is_ascii_hexdigit())?;
            Some(value * 16 + hex_value(digit))
        })
    }

    /// `\uHHHH`, plus in Unicode mode `\u{H…}` and surrogate pairs written
    /// as two escapes. The leading `\` has already been consumed.
    pub(super) fn unicode_escape(&mut self) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("u") {
                return Production::NoMatch;
            }
            if s.unicode && s.cursor.eat("{") {
                return s.braced_code_point();
            }
            let Some(lead) = s.fixed_hex_digits(4) else {
                return Production::NoMatch;
            };
            if s.unicode && (0xD800..=0xDBFF).contains(&lead) {
                let pair = s.backtrack(|s| {
                    if !s.cursor.eat("\\u") {
                        return Production::NoMatch;
                    }
                    match s.fixed_hex_digits(4) {
                        Some(trail) if (0xDC00..=0xDFFF).contains(&trail) => {
                            Production::CodePoint(0x10000 + ((lead & 0x3FF) << 10) + (trail & 0x3FF))
                        }
                        _ => Production::NoMatch,
                    }
                });
                if pair.is_match() {
                    return pair;
                }
            }
            Production::CodePoint(lead)
        })
    }

    /// The `H…}` of `\u{H…}`, at most U+10FFFF.
    fn braced_code_point(&mut self) -> Production {
        let mut value: u32 = 0;
        let mut digits = 0;
        while !self.cursor.eat("}") {
            let Some(digit) = self.cursor.eat_ascii_if(|b| b.is_ascii_hexdigit()) else {
                return Production::NoMatch;
            };
            value = value.saturating_mul(16).saturating_add(hex_value(digit));
            digits += 1;
        }
        if digits == 0 || value > 0x10FFFF {
            return Production::NoMatch;
        }
        Production::CodePoint(value)
    }

    /// `\O`, `\OO` or `\ZOO` (Z in 0-3). Legacy mode only.
    fn legacy_octal_escape(&mut self) -> Production {
        if self.unicode {
            return Production::NoMatch;
        }
        let Some(first) = self.cursor.eat_ascii_if(is_octal_digit) else {
            return Production::NoMatch;
        };
        let mut value = u32::from(first - b'0');
        let max_digits = if first <= b'3' { 3 } else { 2 };
        for _ in 1..max_digits {
            match self.cursor.eat_ascii_if(is_octal_digit) {
                Some(digit) => value = value * 8 + u32::from(digit - b'0'),
                None => break,
            }
        }
        Production::CodePoint(value)
    }

    /// Unicode mode: a syntax character or `/`. Legacy mode: anything but
    /// `c` and `k`, which have meanings of their own.
    fn identity_escape(&mut self) -> Production {
        let Some(code_point) = self.cursor.peek_code_point() else {
            return Production::NoMatch;
        };
        let allowed = if self.unicode {
            is_one_of(code_point, SYNTAX_CHARACTERS) || code_point == u32::from('/')
        } else {
            code_point != u32::from('c') && code_point != u32::from('k')
        };
        if !allowed {
            return Production::NoMatch;
        }
        self.cursor.advance_code_point();
        Production::CodePoint(code_point)
    }

    /// `\k<name>`. Legacy mode tolerates a malformed name and records it as a
    /// reference that can never resolve.
    fn named_backreference(&mut self) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("k") {
                return Production::NoMatch;
            }
            match s.group_name() {
                Production::Name(name) => {
                    s.backreference_names.push(GroupReference::Named(name));
                    Production::Matched
                }
                _ if s.unicode => Production::NoMatch,
                _ => {
                    s.backreference_names.push(GroupReference::Invalid);
                    Production::Matched
                }
            }
        })
    }

    /// `<name>`, where `name` is an identifier that may contain `\u` escapes.
    pub(super) fn group_name(&mut self) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("<") {
                return Production::NoMatch;
            }
            let Some(start) = s.identifier_character(|c| {
                c == u32::from('$') || c == u32::from('_') || is_identifier_start(c)
            }) else {
                return Production::NoMatch;
            };
            let mut name = String::from(start);
            while let Some(part) = s.identifier_character(|c| {
                c == u32::from('$') || c == ZWNJ || c == ZWJ || is_identifier_part(c)
            }) {
                name.push(part);
            }
            if !s.cursor.eat(">") {
                return Production::NoMatch;
            }
            Production::Name(name)
        })
    }

    /// Consume one identifier character, literal or `\u` escaped, if it
    /// satisfies `accepted`.
    fn identifier_character(&mut self, accepted: impl Fn(u32) -> bool) -> Option<char> {
        let start = self.cursor.position();
        let code_point = if self.cursor.eat("\\") {
            self.unicode_escape().code_point()
        } else {
            self.cursor.advance_code_point()
        };
        match code_point.filter(|&c| accepted(c)).and_then(char::from_u32) {
            Some(c) => Some(c),
            None => {
                self.cursor.rewind(start);
                None
            }
        }
    }
}
