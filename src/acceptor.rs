use crate::options::Options;
use crate::state::RecognizerState;
use crate::validator::validate;

/// Decide whether `pattern` is a syntactically valid ECMAScript regular
/// expression pattern.
///
/// `pattern` is the text between the slashes of a literal, without flags.
/// The result depends only on `pattern` and `options`.
///
/// ```rust
/// use regexp_acceptor::{Options, accept};
///
/// assert!(accept("a{2,3}", Options::default()));
/// assert!(accept("]", Options::default()));
/// assert!(!accept("]", Options::new().unicode(true)));
/// ```
pub fn accept(pattern: &str, options: Options) -> bool {
    let mut state = RecognizerState::new(pattern, options);
    let accepted = state.disjunction(None).is_match() && validate(&state);
    log::trace!(
        "{} {pattern:?} (unicode: {})",
        if accepted { "accepted" } else { "rejected" },
        options.is_unicode()
    );
    accepted
}
