//! Recognizer state shared by every production of one `accept` call.

use indexmap::IndexSet;

use crate::cursor::Cursor;
use crate::options::Options;
use crate::production::Production;

/// A `\k` backreference as recorded during recognition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupReference {
    Named(String),
    /// `\k` without a well-formed `<name>`. Never resolves to a group.
    Invalid,
}

/// Mutable state threaded through the grammar.
#[derive(Debug)]
pub struct RecognizerState {
    pub(crate) cursor: Cursor,
    pub(crate) unicode: bool,
    /// Every `\N` seen, in order. Whether each is a backreference or an octal
    /// escape is settled once the group count is known.
    pub(crate) backreference_candidates: Vec<u32>,
    pub(crate) backreference_names: Vec<GroupReference>,
    pub(crate) group_names: IndexSet<String>,
    pub(crate) capturing_group_count: u32,
    depth: usize,
    max_nesting: usize,
}

/// What [`RecognizerState::backtrack`] restores. Group names and named
/// backreferences are not part of it.
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    position: usize,
    backreference_candidates: usize,
    capturing_group_count: u32,
}

impl RecognizerState {
    pub fn new(pattern: &str, options: Options) -> Self {
        Self {
            cursor: Cursor::new(pattern, options.is_unicode()),
            unicode: options.is_unicode(),
            backreference_candidates: Vec::new(),
            backreference_names: Vec::new(),
            group_names: IndexSet::new(),
            capturing_group_count: 0,
            depth: 0,
            max_nesting: options.nesting_limit(),
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.cursor.position(),
            backreference_candidates: self.backreference_candidates.len(),
            capturing_group_count: self.capturing_group_count,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.cursor.rewind(snapshot.position);
        self.backreference_candidates
            .truncate(snapshot.backreference_candidates);
        self.capturing_group_count = snapshot.capturing_group_count;
    }

    /// Run `production`, undoing its effects if it does not match.
    pub(crate) fn backtrack(
        &mut self,
        production: impl FnOnce(&mut Self) -> Production,
    ) -> Production {
        let snapshot = self.snapshot();
        let result = production(self);
        if !result.is_match() {
            self.restore(snapshot);
        }
        result
    }

    /// Try `productions` in order; the first one to match wins.
    pub(crate) fn any_of(&mut self, productions: &[fn(&mut Self) -> Production]) -> Production {
        for production in productions {
            let result = production(self);
            if result.is_match() {
                return result;
            }
        }
        Production::NoMatch
    }

    /// Run `production` one nesting level deeper, failing once the limit is hit.
    pub(crate) fn nested(&mut self, production: impl FnOnce(&mut Self) -> Production) -> Production {
        if self.depth >= self.max_nesting {
            log::debug!(
                "nesting limit of {} reached at offset {}",
                self.max_nesting,
                self.cursor.position()
            );
            return Production::NoMatch;
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn record_backreference(&mut self, number: u32) {
        self.backreference_candidates.push(number);
    }
}
