//! Character classes: `[…]` and `[^…]`.

use crate::production::Production;
use crate::state::RecognizerState;

impl RecognizerState {
    pub(super) fn character_class(&mut self) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("[") {
                return Production::NoMatch;
            }
            s.cursor.eat("^");
            if s.cursor.eat("]") {
                return Production::Matched;
            }
            let ranges = s.class_ranges();
            if ranges.is_match() {
                s.cursor.eat("]");
            }
            ranges
        })
    }

    /// Class atoms and ranges up to, but not including, the closing `]`.
    ///
    /// A `-` right after `[` or right before `]` is a literal; a `-` that
    /// follows a complete range starts a new atom.
    fn class_ranges(&mut self) -> Production {
        let mut low = self.class_atom();
        loop {
            if !low.is_match() {
                return Production::NoMatch;
            }
            if self.cursor.eat("-") {
                if self.cursor.matches("]") {
                    return Production::Matched;
                }
                let high = self.class_atom();
                if !high.is_match() || !self.is_ordered_range(&low, &high) {
                    return Production::NoMatch;
                }
                if self.cursor.matches("]") {
                    return Production::Matched;
                }
                low = self.class_atom();
            } else {
                if self.cursor.matches("]") {
                    return Production::Matched;
                }
                low = self.class_atom_no_dash();
            }
        }
    }

    /// Unicode mode needs two single characters in order. Legacy mode lets a
    /// class escape such as `\d` stand at either end, with no ordering check.
    fn is_ordered_range(&self, low: &Production, high: &Production) -> bool {
        match (low.code_point(), high.code_point()) {
            (Some(low), Some(high)) => low <= high,
            _ => !self.unicode,
        }
    }

    fn class_atom(&mut self) -> Production {
        if self.cursor.eat("-") {
            return Production::CodePoint(u32::from('-'));
        }
        self.class_atom_no_dash()
    }

    fn class_atom_no_dash(&mut self) -> Production {
        let Some(code_point) = self.cursor.peek_code_point() else {
            return Production::NoMatch;
        };
        if code_point == u32::from(']') || code_point == u32::from('-') {
            return Production::NoMatch;
        }
        if code_point != u32::from('\\') {
            self.cursor.advance_code_point();
            return Production::CodePoint(code_point);
        }
        self.cursor.eat("\\");
        let escape = self.class_escape();
        if !escape.is_match() && !self.unicode && self.cursor.matches("c") {
            // `[\c]` and friends: the backslash is a literal and `c` follows.
            return Production::CodePoint(u32::from('\\'));
        }
        escape
    }

    fn class_escape(&mut self) -> Production {
        self.any_of(&[
            |s| s.eat_as("b", 0x08),
            |s| if s.unicode { s.eat_as("-", u32::from('-')) } else { Production::NoMatch },
            Self::class_control_escape,
            Self::character_class_escape,
            Self::character_escape,
            // Outside a class `\k` is a named backreference; inside one it is
            // just a `k` in legacy mode.
            |s| if s.unicode { Production::NoMatch } else { s.eat_as("k", u32::from('k')) },
        ])
    }

    fn eat_as(&mut self, literal: &str, code_point: u32) -> Production {
        if self.cursor.eat(literal) {
            Production::CodePoint(code_point)
        } else {
            Production::NoMatch
        }
    }

    /// Legacy `\c` followed by a digit or `_`, valid only inside a class.
    fn class_control_escape(&mut self) -> Production {
        if self.unicode {
            return Production::NoMatch;
        }
        self.backtrack(|s| {
            if !s.cursor.eat("c") {
                return Production::NoMatch;
            }
            match s.cursor.eat_ascii_if(|b| b.is_ascii_digit() || b == b'_') {
                Some(c) => Production::CodePoint(u32::from(c) % 32),
                None => Production::NoMatch,
            }
        })
    }
}
