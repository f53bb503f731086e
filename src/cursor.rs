//! Position-tracking view over a pattern.
//!
//! The pattern is held as UTF-16 code units, the way ECMAScript sees source
//! text. In Unicode mode a surrogate pair reads as one code point; otherwise
//! every unit stands on its own.

#[derive(Debug, Clone)]
pub struct Cursor {
    units: Vec<u16>,
    position: usize,
    unicode: bool,
}

impl Cursor {
    pub fn new(pattern: &str, unicode: bool) -> Self {
        Self {
            units: pattern.encode_utf16().collect(),
            position: 0,
            unicode,
        }
    }

    /// Offset of the next unit to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move back to an earlier position. Used only when backtracking.
    pub fn rewind(&mut self, position: usize) {
        debug_assert!(position <= self.position);
        self.position = position;
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.units.len()
    }

    /// The next code point, without consuming it.
    pub fn peek_code_point(&self) -> Option<u32> {
        self.peek_with_width().map(|(code_point, _)| code_point)
    }

    /// Consume exactly what [`Cursor::peek_code_point`] reports.
    pub fn advance_code_point(&mut self) -> Option<u32> {
        let (code_point, width) = self.peek_with_width()?;
        self.position += width;
        Some(code_point)
    }

    fn peek_with_width(&self) -> Option<(u32, usize)> {
        let lead = *self.units.get(self.position)?;
        if self.unicode
            && (0xD800..=0xDBFF).contains(&lead)
            && let Some(&trail) = self.units.get(self.position + 1)
            && (0xDC00..=0xDFFF).contains(&trail)
        {
            let code_point = 0x10000 + ((u32::from(lead) - 0xD800) << 10) + (u32::from(trail) - 0xDC00);
            return Some((code_point, 2));
        }
        Some((u32::from(lead), 1))
    }

    /// True if `literal` appears at the current position.
    pub fn matches(&self, literal: &str) -> bool {
        let mut rest = self.units[self.position..].iter();
        literal.encode_utf16().all(|unit| rest.next() == Some(&unit))
    }

    /// Consume `literal` if it appears at the current position.
    pub fn eat(&mut self, literal: &str) -> bool {
        if !self.matches(literal) {
            return false;
        }
        self.position += literal.encode_utf16().count();
        true
    }

    /// Consume the first of `literals` that appears at the current position.
    pub fn eat_any(&mut self, literals: &[&'static str]) -> Option<&'static str> {
        literals.iter().copied().find(|literal| self.eat(literal))
    }

    /// Consume one ASCII character satisfying `predicate`.
    pub fn eat_ascii_if(&mut self, predicate: impl Fn(u8) -> bool) -> Option<u8> {
        let unit = *self.units.get(self.position)?;
        let byte = u8::try_from(unit).ok().filter(u8::is_ascii)?;
        if !predicate(byte) {
            return None;
        }
        self.position += 1;
        Some(byte)
    }

    /// True if the next unit is an ASCII decimal digit.
    pub fn matches_digit(&self) -> bool {
        self.units
            .get(self.position)
            .is_some_and(|&unit| (u16::from(b'0')..=u16::from(b'9')).contains(&unit))
    }

    /// Greedily consume decimal digits. `None` when there are none.
    pub fn eat_natural_number(&mut self) -> Option<String> {
        let mut digits = String::new();
        while let Some(digit) = self.eat_ascii_if(|b| b.is_ascii_digit()) {
            digits.push(char::from(digit));
        }
        if digits.is_empty() { None } else { Some(digits) }
    }
}
