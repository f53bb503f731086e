//! Checks that need the whole pattern: backreferences against the groups
//! that were eventually defined.

use crate::state::{GroupReference, RecognizerState};

/// True if every recorded backreference is acceptable once recognition has
/// matched the whole pattern.
///
/// In Unicode mode every `\N` must name an existing group. Legacy mode reads
/// an out of range `\N` as an octal or identity escape instead. Named
/// references are checked in Unicode mode, and in legacy mode once the
/// pattern defines at least one named group.
pub(crate) fn validate(state: &RecognizerState) -> bool {
    if state.unicode
        && let Some(&number) = state
            .backreference_candidates
            .iter()
            .find(|&&number| number > state.capturing_group_count)
    {
        log::debug!(
            "\\{number} refers past the last of {} groups",
            state.capturing_group_count
        );
        return false;
    }

    if state.unicode || !state.group_names.is_empty() {
        for reference in &state.backreference_names {
            match reference {
                GroupReference::Named(name) if state.group_names.contains(name) => {}
                GroupReference::Named(name) => {
                    log::debug!("\\k<{name}> refers to no group");
                    return false;
                }
                GroupReference::Invalid => {
                    log::debug!("malformed \\k in a pattern with named groups");
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn state(unicode: bool) -> RecognizerState {
        RecognizerState::new("", Options::new().unicode(unicode))
    }

    #[test]
    fn test_empty_state_is_valid() {
        assert!(validate(&state(false)));
        assert!(validate(&state(true)));
    }

    #[test]
    fn test_numbered_reference_past_groups() {
        let mut s = state(true);
        s.record_backreference(2);
        s.capturing_group_count = 1;
        assert!(!validate(&s));
        s.capturing_group_count = 2;
        assert!(validate(&s));
    }

    #[test]
    fn test_legacy_ignores_numbered_references() {
        let mut s = state(false);
        s.record_backreference(9);
        assert!(validate(&s));
    }

    #[test]
    fn test_named_reference_unicode() {
        let mut s = state(true);
        s.backreference_names.push(GroupReference::Named("x".to_string()));
        assert!(!validate(&s));
        s.group_names.insert("x".to_string());
        assert!(validate(&s));
    }

    #[test]
    fn test_named_reference_legacy_without_groups() {
        let mut s = state(false);
        s.backreference_names.push(GroupReference::Named("x".to_string()));
        s.backreference_names.push(GroupReference::Invalid);
        assert!(validate(&s));
    }

    #[test]
    fn test_invalid_reference_legacy_with_groups() {
        let mut s = state(false);
        s.group_names.insert("a".to_string());
        s.backreference_names.push(GroupReference::Invalid);
        assert!(!validate(&s));
    }
}
