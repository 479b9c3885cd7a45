use super::*;

#[test]
fn parses_all_three_forms() {
    assert_eq!(
        BracketRange::parse("10-15"),
        Some(BracketRange::Inclusive { min: 10, max: 15 })
    );
    assert_eq!(
        BracketRange::parse("1000+"),
        Some(BracketRange::AtLeast { min: 1000 })
    );
    assert_eq!(
        BracketRange::parse("<15"),
        Some(BracketRange::Below { max: 15 })
    );
}

#[test]
fn tolerates_whitespace() {
    assert_eq!(
        BracketRange::parse(" 16 - 40 "),
        Some(BracketRange::Inclusive { min: 16, max: 40 })
    );
    assert_eq!(
        BracketRange::parse("< 15"),
        Some(BracketRange::Below { max: 15 })
    );
}

#[test]
fn malformed_descriptors_do_not_parse() {
    for d in ["", "abc", "10-", "-", "x-15", "10-y", "+", "<", "<x", "ten+", "10"] {
        assert_eq!(BracketRange::parse(d), None, "descriptor {d:?}");
    }
}

#[test]
fn negative_lower_bound_parses() {
    assert_eq!(
        BracketRange::parse("-5-3"),
        Some(BracketRange::Inclusive { min: -5, max: 3 })
    );
}

#[test]
fn inclusive_range_matches_both_ends() {
    let r = BracketRange::Inclusive { min: 10, max: 15 };
    assert!(!r.contains(9));
    assert!(r.contains(10));
    assert!(r.contains(15));
    assert!(!r.contains(16));
}

#[test]
fn below_is_exclusive() {
    let r = BracketRange::Below { max: 15 };
    assert!(r.contains(14));
    assert!(!r.contains(15));
    assert!(r.contains(0));
    assert!(r.contains(-3));
}

#[test]
fn at_least_is_open_ended() {
    let r = BracketRange::AtLeast { min: 1000 };
    assert!(!r.contains(999));
    assert!(r.contains(1000));
    assert!(r.contains(i64::MAX));
}

#[test]
fn display_is_canonical() {
    assert_eq!(BracketRange::parse(" 16 - 40 ").unwrap().to_string(), "16-40");
    assert_eq!(BracketRange::parse("1000+").unwrap().to_string(), "1000+");
    assert_eq!(BracketRange::parse("<15").unwrap().to_string(), "<15");
}

#[test]
fn malformed_bracket_never_matches() {
    let b = Bracket::new("decorative", 999);
    assert_eq!(b.range(), None);
    assert!(!b.matches(0));
    assert!(!b.matches(999));
    assert_eq!(b.descriptor(), "decorative");
}
