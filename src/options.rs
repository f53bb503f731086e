//! Settings for a single call to [`accept`](crate::accept).

/// Default limit on nested groups, look-arounds and `(?:…)`.
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Selects the grammar variant and bounds recursion.
///
/// ```rust
/// use regexp_acceptor::{Options, accept};
///
/// assert!(accept(r"\u{1F4A9}", Options::new().unicode(true)));
/// assert!(!accept("((a))", Options::new().max_nesting(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    unicode: bool,
    max_nesting: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unicode: false,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl Options {
    /// Legacy (Annex B) mode with the default nesting limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the strict grammar of the `u` flag.
    pub fn unicode(mut self, enabled: bool) -> Self {
        self.unicode = enabled;
        self
    }

    /// Reject patterns whose groups nest deeper than `depth`.
    pub fn max_nesting(mut self, depth: usize) -> Self {
        self.max_nesting = depth;
        self
    }

    pub fn is_unicode(&self) -> bool {
        self.unicode
    }

    pub fn nesting_limit(&self) -> usize {
        self.max_nesting
    }
}
