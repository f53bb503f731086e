use super::*;
use crate::acceptor::accept;
use crate::options::Options;

fn legacy(pattern: &str) -> bool {
    accept(pattern, Options::new())
}

fn unicode(pattern: &str) -> bool {
    accept(pattern, Options::new().unicode(true))
}

fn assert_legacy(patterns: &[&str], expected: bool) {
    for pattern in patterns {
        assert_eq!(legacy(pattern), expected, "legacy mode: {pattern:?}");
    }
}

fn assert_unicode(patterns: &[&str], expected: bool) {
    for pattern in patterns {
        assert_eq!(unicode(pattern), expected, "unicode mode: {pattern:?}");
    }
}

fn assert_both(patterns: &[&str], expected: bool) {
    assert_legacy(patterns, expected);
    assert_unicode(patterns, expected);
}

#[test]
fn test_natural_greater_than() {
    assert!(natural_greater_than("10", "5"));
    assert!(natural_greater_than("007", "6"));
    assert!(!natural_greater_than("5", "5"));
    assert!(!natural_greater_than("005", "5"));
    assert!(!natural_greater_than("99999999999999999998", "99999999999999999999"));
    assert!(natural_greater_than("100000000000000000000", "99999999999999999999"));
}

#[test]
fn test_natural_value_saturates() {
    assert_eq!(natural_value("0"), 0);
    assert_eq!(natural_value("123"), 123);
    assert_eq!(natural_value("99999999999999999999"), u32::MAX);
}

#[test]
fn test_disjunctions_and_assertions() {
    assert_both(&["", "a", "a|b", "|", ".", "[a-b]"], true);
    assert_legacy(
        &[".|.", ".||.", "|.||.|", "^$\\b\\B", "^X", "X$", "\\bX", "\\BX"],
        true,
    );
}

#[test]
fn test_lookarounds() {
    assert_both(
        &[
            "(?=t|v|X|.|$||)",
            "(?!t|v|X|.|$||)",
            "(?<=t|v|X|.|$||)",
            "(?<!t|v|X|.|$||)",
        ],
        true,
    );
    assert_both(&["(?<=t|v|X|.|$||)*", "(?<!t|v|X|.|$||)*"], false);
}

#[test]
fn test_quantified_lookahead() {
    assert_legacy(&["(?=t|v|X|.|$||)*", "(?!t|v|X|.|$||)*"], true);
    assert_unicode(&["(?=t|v|X|.|$||)*", "(?!t|v|X|.|$||)*"], false);
}

#[test]
fn test_quantifiers() {
    assert_both(
        &[
            "X*", "X+", "X?", "X*?", "X+?", "X??", "X{5}", "X{5,}", "X{5,10}", "X{5}?",
            "X{5,}?", "X{5,10}?", "X{5,5}",
        ],
        true,
    );
    assert_both(&["X{10,5}", "X{10,5}?", "{5,10}", "*", "+a", "a**"], false);
}

#[test]
fn test_literal_braces() {
    assert_legacy(
        &["{dfwfdf}", "{5.}", "{5,X}", "{5,10X}", "t{5", "}*", "]*", "}", "]"],
        true,
    );
    assert_unicode(
        &["{dfwfdf}", "{5.}", "{5,X}", "{5,10X}", "5{5,1G}", "}*", "]*", "}", "]"],
        false,
    );
}

#[test]
fn test_groups() {
    assert_both(&["()", "(a)", "(?:)", "(?:X)", "((a)|(b))", "(?<X>)"], true);
    assert_both(&["(", ")", "(a", "a)", "(?:", "(?<X>", "(?X)"], false);
}

#[test]
fn test_duplicate_group_names() {
    assert_both(&["(?<X>)(?<X>)", "(?<a>x)(?<a>y)"], false);
    assert_both(&["(?<a>x)(?<b>y)"], true);
}

#[test]
fn test_group_names() {
    assert_both(
        &["(?<$>)", "(?<_x1>)", "(?<é>)", "(?<\\u0061b>)", "(?<a\\u200C>)"],
        true,
    );
    assert_both(&["(?<1>)", "(?<>)", "(?<a-b>)", "(?<\\u0031>)"], false);
}

#[test]
fn test_decimal_escapes() {
    assert_both(&["\\0", "\\1()", "a(b)\\1"], true);
    assert_legacy(&["\\123", "\\2", "\\1", "(?:)\\1"], true);
    assert_unicode(&["\\123", "\\1", "\\2", "(?:)\\1"], false);
    assert_unicode(&["\\2()()"], true);
}

#[test]
fn test_backreference_counts_later_groups() {
    let nine = "\\10(1)(2)(3)(4)(5)(6)(7)(8)(9)";
    let ten = "\\10(1)(2)(3)(4)(5)(6)(7)(8)(9)(10)";
    assert_legacy(&[nine, ten], true);
    assert_unicode(&[nine], false);
    assert_unicode(&[ten], true);
}

#[test]
fn test_character_escapes() {
    assert_both(
        &["\\d", "\\D", "\\s", "\\S", "\\w", "\\W", "\\f", "\\n", "\\r", "\\t", "\\v"],
        true,
    );
    assert_both(&["\\ca", "\\cZ", "\\xAA", "\\x0F", "\\u10AB", "\\$", "\\/"], true);
    assert_legacy(&["\\d]", "\\xZZ", "\\L", "\\c", "\\uZZ", "\\z"], true);
    assert_unicode(&["\\xZZ", "\\L", "\\c", "\\uZZ", "\\z", "\\-"], false);
    assert_both(&["\\"], false);
}

#[test]
fn test_unicode_escapes() {
    assert_unicode(
        &[
            "\\uD800",
            "\\uDF00",
            "\\uD800\\uDF00",
            "\\ud800\\u1000",
            "\\u{0}",
            "\\u{10}",
            "\\u{001AD}",
            "\\u{10FFFF}",
        ],
        true,
    );
    assert_unicode(
        &["\\u{110FFFF}", "\\u{ZZ}", "\\u{}", "\\u{1", "\\ud800\\uZZ"],
        false,
    );
}

#[test]
fn test_character_classes() {
    assert_both(
        &[
            "[]",
            "[^]",
            "[X]",
            "[^X]",
            "[-X]",
            "[^-X]",
            "[X-]",
            "[^X-]",
            "[0-9-a-]",
            "[^0-9-a-]",
            "[0-9-a-z]",
            "[^0-9-a-z]",
            "[0-9-a-z-]",
            "[^0-9-a-z-]",
            "[{}[||)(()\\]?+*.$^]",
            "[\\b]",
            "[\\d]",
            "[\\D]",
            "[\\s]",
            "[\\S]",
            "[\\w]",
            "[\\W]",
            "[a-a]",
        ],
        true,
    );
    assert_both(&["[", "[a", "[^", "[b-a]", "[a-\\d"], false);
}

#[test]
fn test_class_escapes() {
    assert_legacy(
        &[
            "[\\c5]", "[\\c10]", "[\\c_]", "[\\\\5]", "[\\123]", "[\\_]", "[\\1]", "[\\9]", "[\\-]",
            "[\\7]", "[\\15]", "[\\153]", "[\\72]", "[\\c0-\\c9]", "[\\c]",
        ],
        true,
    );
    assert_legacy(&["[\\c9-\\c0]"], false);
    assert_unicode(&["[\\-]", "[\\\\]", "[\\u{1F4A9}]"], true);
    assert_unicode(
        &["[\\123]", "[\\_]", "[\\1]", "[\\9]", "[\\c]", "[\\c1]", "[\\c10]"],
        false,
    );
}

#[test]
fn test_class_escape_in_range() {
    assert_legacy(&["[\\s-X]", "[X-\\d]", "[\\w-\\d]"], true);
    assert_unicode(&["[\\s-X]", "[X-\\d]", "[\\w-\\d]"], false);
}

#[test]
fn test_octal_class_ranges() {
    assert_legacy(
        &["[\\1-\\127]", "[\\128-9]", "[\\99-\\100]", "[\\1279991-9]", "[\\99-\\98]"],
        true,
    );
    assert_legacy(&["[\\2-\\1]", "[\\127-\\1]", "[\\100-\\99]"], false);
}

#[test]
fn test_astral_ranges() {
    assert_unicode(&["[💩-💫]", "[\\u{1F4A9}-\\u{1F4AB}]", "[\\uD83D\\uDCA9-\\uD83D\\uDCAB]"], true);
    assert_unicode(&["[💫-💩]", "[\\u{1F4AB}-\\u{1F4A9}]"], false);
    // Without the u flag each half of a surrogate pair is its own atom.
    assert_legacy(&["[🌷-🌸]"], false);
    assert_legacy(&["[🌷]", "💩"], true);
}

#[test]
fn test_named_backreferences() {
    assert_both(&["(?<X>)\\k<X>", "\\k<X>(?<X>)"], true);
    assert_legacy(
        &["\\k", "\\k<", "\\k<x", "\\k<x>", "[\\k]", "[\\k<]", "[\\k<x]", "[\\k<x>]", "[\\k](?<x>)"],
        true,
    );
    assert_legacy(
        &["(?<a>a)\\k", "(?<a>a)\\k<", "(?<a>a)\\k<a", "(?<a>a)\\k<x>"],
        false,
    );
    assert_unicode(&["\\k", "\\k<", "[\\k]", "\\k<X>", "(?<a>a)\\k<x>"], false);
}

#[test]
fn test_property_escapes() {
    assert_unicode(
        &[
            "\\p{ASCII}",
            "\\P{ASCII}",
            "\\p{Any}",
            "\\p{Alpha}",
            "\\p{gc=LC}",
            "\\p{General_Category=LC}",
            "\\p{General_Category=Cased_Letter}",
            "\\P{gc=LC}",
            "\\P{LC}",
            "\\p{Other_Number}",
            "\\p{No}",
            "\\p{sc=Latin}",
            "\\p{Script=Latn}",
            "\\p{scx=Ahom}",
            "[\\p{Lu}\\P{Ll}]",
        ],
        true,
    );
    assert_unicode(
        &[
            "\\p{ASCIIII}",
            "\\p{gcc=LCC}",
            "\\P{ASCIIII}",
            "\\P{gcc=LCC}",
            "\\p{Script_Extensions}",
            "\\p{Ahom}",
            "\\p{gc}",
            "\\p{sc}",
            "\\p{ascii}",
            "\\p{ASCII=Y}",
            "\\p{gc=Latin}",
            "\\p{}",
            "\\p{Lu",
            "\\p",
            "[\\p{Lu}-z]",
        ],
        false,
    );
}

#[test]
fn test_property_escape_is_literal_in_legacy_mode() {
    assert_legacy(&["\\p{ASCII}", "\\p{ASCIIII}", "\\P{gc}", "\\p"], true);
}

#[test]
fn test_nesting_limit() {
    let options = Options::new().max_nesting(2);
    assert!(accept("((a))", options));
    assert!(accept("(?:(?=a))", options));
    assert!(!accept("(((a)))", options));
    assert!(accept("[(((]", Options::new().max_nesting(0)));
    assert!(!accept("()", Options::new().max_nesting(0)));
}

#[test]
fn test_deep_nesting_fails_closed() {
    let depth = 64;
    let pattern = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    assert!(accept(&pattern, Options::new().max_nesting(depth)));
    assert!(!accept(&pattern, Options::new().max_nesting(depth - 1)));
    assert!(!accept(&"(".repeat(10_000), Options::new().max_nesting(depth)));
}

#[test]
fn test_long_class_does_not_recurse() {
    let pattern = format!("[{}]", "a-z".repeat(50_000));
    assert!(legacy(&pattern));
    assert!(unicode(&pattern));
}
