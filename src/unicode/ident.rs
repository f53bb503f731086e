//! Unicode identifier classes, as used by group names.
//!
//! `$`, `_`, ZWNJ and ZWJ are special cases of the identifier grammar and are
//! handled by the caller, not here.

const fn ascii_table(digits: bool, underscore: bool) -> [bool; 128] {
    let mut table = [false; 128];
    let mut b = 0;
    while b < 128 {
        let c = b as u8;
        table[b] = c.is_ascii_alphabetic()
            || (digits && c.is_ascii_digit())
            || (underscore && c == b'_');
        b += 1;
    }
    table
}

const ASCII_ID_START: [bool; 128] = ascii_table(false, false);
const ASCII_ID_CONTINUE: [bool; 128] = ascii_table(true, true);

/// True if `code_point` has the ID_Start property.
pub fn is_identifier_start(code_point: u32) -> bool {
    match usize::try_from(code_point) {
        Ok(index) if index < ASCII_ID_START.len() => ASCII_ID_START[index],
        _ => char::from_u32(code_point).is_some_and(unic_ucd_ident::is_id_start),
    }
}

/// True if `code_point` has the ID_Continue property.
pub fn is_identifier_part(code_point: u32) -> bool {
    match usize::try_from(code_point) {
        Ok(index) if index < ASCII_ID_CONTINUE.len() => ASCII_ID_CONTINUE[index],
        _ => char::from_u32(code_point).is_some_and(unic_ucd_ident::is_id_continue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_start() {
        assert!(is_identifier_start(u32::from('a')));
        assert!(is_identifier_start(u32::from('Z')));
        assert!(!is_identifier_start(u32::from('0')));
        assert!(!is_identifier_start(u32::from('_')));
        assert!(!is_identifier_start(u32::from('$')));
        assert!(!is_identifier_start(u32::from('-')));
    }

    #[test]
    fn test_ascii_part() {
        assert!(is_identifier_part(u32::from('a')));
        assert!(is_identifier_part(u32::from('7')));
        assert!(is_identifier_part(u32::from('_')));
        assert!(!is_identifier_part(u32::from('$')));
        assert!(!is_identifier_part(u32::from('>')));
    }

    #[test]
    fn test_non_ascii() {
        assert!(is_identifier_start(u32::from('é')));
        assert!(is_identifier_start(u32::from('π')));
        assert!(!is_identifier_start(0x0301));
        assert!(is_identifier_part(0x0301));
        assert!(!is_identifier_part(u32::from('💩')));
    }

    #[test]
    fn test_surrogates_are_not_identifiers() {
        assert!(!is_identifier_start(0xD83D));
        assert!(!is_identifier_part(0xDCA9));
    }
}
