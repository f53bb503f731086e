//! Recursive descent recognizer for ECMAScript regular expression patterns.
//!
//! Every production is a method on [`RecognizerState`] returning a
//! [`Production`]. Alternatives are tried in a fixed order and the first match
//! wins. Productions that can fail part way through run under
//! [`RecognizerState::backtrack`].
//!
//! Two grammars share these methods. Unicode mode is the grammar of the `u`
//! flag. Legacy mode adds the Annex B relaxations:
//!
//! | Construct        | Unicode mode          | Legacy mode                 |
//! |------------------|-----------------------|-----------------------------|
//! | `(?=x)*`         | rejected              | quantified look-ahead       |
//! | `a{1,x}`, `{`    | rejected              | literal braces              |
//! | `]`, `}`         | rejected              | literal characters          |
//! | `\1` without `(` | rejected              | octal escape                |
//! | `\z`, `\k`       | rejected              | identity escape             |
//! | `[\d-z]`         | rejected              | three characters            |
//! | `\p{…}`          | property escape       | literal `p{…}`              |

mod class;
mod escape;
mod property;

#[cfg(test)]
mod tests;

use crate::production::Production;
use crate::state::RecognizerState;

/// Characters that cannot appear unescaped as an atom in Unicode mode.
const SYNTAX_CHARACTERS: &str = "^$\\.*+?()[]{}|";

/// Characters that cannot appear unescaped as an atom in legacy mode.
const EXTENDED_SYNTAX_CHARACTERS: &str = "^$\\.*+?()[|";

fn is_one_of(code_point: u32, characters: &str) -> bool {
    characters.chars().any(|c| u32::from(c) == code_point)
}

impl RecognizerState {
    /// Alternatives separated by `|`, up to `terminator` or end of input.
    pub(crate) fn disjunction(&mut self, terminator: Option<&str>) -> Production {
        loop {
            if let Some(terminator) = terminator
                && self.cursor.eat(terminator)
            {
                return Production::Matched;
            }
            if !self.cursor.matches("|") && !self.alternative(terminator).is_match() {
                return Production::NoMatch;
            }
            if !self.cursor.eat("|") {
                break;
            }
        }
        Production::from(terminator.is_none_or(|terminator| self.cursor.eat(terminator)))
    }

    fn alternative(&mut self, terminator: Option<&str>) -> Production {
        while !self.cursor.matches("|")
            && !self.cursor.is_at_end()
            && terminator.is_none_or(|terminator| !self.cursor.matches(terminator))
        {
            if !self.term().is_match() {
                return Production::NoMatch;
            }
        }
        Production::Matched
    }

    fn term(&mut self) -> Production {
        if self.unicode {
            self.any_of(&[Self::assertion, |s| s.quantified(Self::atom)])
        } else {
            self.any_of(&[
                |s| s.quantified(Self::lookahead),
                Self::assertion,
                |s| s.quantified(Self::atom),
            ])
        }
    }

    /// `(` + `label` + disjunction + `)`, or no match if `label` is absent.
    fn labeled_group(&mut self, labels: &[&'static str]) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("(") || s.cursor.eat_any(labels).is_none() {
                return Production::NoMatch;
            }
            s.nested(|s| s.disjunction(Some(")")))
        })
    }

    /// Look-ahead, which legacy mode allows to be quantified.
    fn lookahead(&mut self) -> Production {
        self.labeled_group(&["?=", "?!"])
    }

    fn assertion(&mut self) -> Production {
        if self.cursor.eat_any(&["^", "$", "\\b", "\\B"]).is_some() {
            return Production::Matched;
        }
        if self.unicode {
            self.labeled_group(&["?=", "?!", "?<=", "?<!"])
        } else {
            self.labeled_group(&["?<=", "?<!"])
        }
    }

    /// `atom` followed by an optional quantifier.
    fn quantified(&mut self, atom: fn(&mut Self) -> Production) -> Production {
        self.backtrack(|s| {
            if !atom(s).is_match() {
                return Production::NoMatch;
            }
            if s.cursor.matches("{") {
                let braced = s.backtrack(Self::braced_quantifier);
                if !braced.is_match() {
                    // Legacy mode rereads the brace as a literal in the next term.
                    return Production::from(!s.unicode);
                }
                return braced;
            }
            if s.cursor.eat_any(&["*", "+", "?"]).is_some() {
                s.cursor.eat("?");
            }
            Production::Matched
        })
    }

    /// `{m}`, `{m,}` or `{m,n}` with `m <= n`, then an optional lazy `?`.
    fn braced_quantifier(&mut self) -> Production {
        self.cursor.eat("{");
        let Some(min) = self.cursor.eat_natural_number() else {
            return Production::NoMatch;
        };
        if self.cursor.eat(",") && self.cursor.matches_digit() {
            match self.cursor.eat_natural_number() {
                Some(max) if !natural_greater_than(&min, &max) => {}
                _ => return Production::NoMatch,
            }
        }
        if !self.cursor.eat("}") {
            return Production::NoMatch;
        }
        self.cursor.eat("?");
        Production::Matched
    }

    /// A brace sequence shaped like a quantifier, with nothing to quantify.
    fn invalid_braced_quantifier(&mut self) -> Production {
        self.backtrack(|s| {
            let shaped = s.cursor.eat("{")
                && s.cursor.eat_natural_number().is_some()
                && (!s.cursor.eat(",")
                    || s.cursor.matches("}")
                    || s.cursor.eat_natural_number().is_some())
                && s.cursor.eat("}");
            Production::from(shaped)
        })
    }

    fn atom(&mut self) -> Production {
        if self.unicode {
            return self.any_of(&[
                Self::pattern_character,
                |s| Production::from(s.cursor.eat(".")),
                Self::escaped_atom,
                Self::character_class,
                Self::non_capturing_group,
                Self::grouping,
            ]);
        }
        let matched = self.any_of(&[
            |s| Production::from(s.cursor.eat(".")),
            Self::escaped_atom,
            // `\c` without a control letter: the backslash stands alone.
            |s| s.backtrack(|s| Production::from(s.cursor.eat("\\") && s.cursor.matches("c"))),
            Self::character_class,
            Self::non_capturing_group,
            Self::grouping,
        ]);
        if matched.is_match() {
            return matched;
        }
        if self.invalid_braced_quantifier().is_match() {
            return Production::NoMatch;
        }
        self.character_except(EXTENDED_SYNTAX_CHARACTERS)
    }

    fn pattern_character(&mut self) -> Production {
        self.character_except(SYNTAX_CHARACTERS)
    }

    fn character_except(&mut self, excluded: &str) -> Production {
        match self.cursor.peek_code_point() {
            Some(code_point) if !is_one_of(code_point, excluded) => {
                self.cursor.advance_code_point();
                Production::CodePoint(code_point)
            }
            _ => Production::NoMatch,
        }
    }

    fn escaped_atom(&mut self) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("\\") {
                return Production::NoMatch;
            }
            s.atom_escape()
        })
    }

    fn non_capturing_group(&mut self) -> Production {
        self.labeled_group(&["?:"])
    }

    /// A capturing group, optionally named with `?<name>`.
    fn grouping(&mut self) -> Production {
        self.backtrack(|s| {
            if !s.cursor.eat("(") {
                return Production::NoMatch;
            }
            let name = s.backtrack(|s| {
                if !s.cursor.eat("?") {
                    return Production::NoMatch;
                }
                s.group_name()
            });
            if !s.nested(|s| s.disjunction(Some(")"))).is_match() {
                return Production::NoMatch;
            }
            if let Production::Name(name) = name
                && !s.group_names.insert(name)
            {
                log::trace!("duplicate group name at offset {}", s.cursor.position());
                return Production::NoMatch;
            }
            s.capturing_group_count += 1;
            Production::Matched
        })
    }
}

/// Compare two decimal digit strings by value, without overflow.
fn natural_greater_than(lhs: &str, rhs: &str) -> bool {
    let lhs = lhs.trim_start_matches('0');
    let rhs = rhs.trim_start_matches('0');
    (lhs.len(), lhs) > (rhs.len(), rhs)
}

/// Value of a decimal digit string, saturating at `u32::MAX`.
fn natural_value(digits: &str) -> u32 {
    digits.bytes().fold(0u32, |value, digit| {
        value.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    })
}
