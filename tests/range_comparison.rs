use rangevers::Range;

#[test]
fn equality_of_hyphen_range_and_explicit() {
    assert_eq!(
        Range::parse("1.2.3 - 2.3.4"),
        Range::parse(">=1.2.3 <=2.3.4")
    );
}

#[test]
fn equality_of_hyphen_range_with_partial_upper_and_explicit() {
    assert_eq!(
        Range::parse("1.2.3 - 2.3"),
        Range::parse(">=1.2.3 <2.4.0-0")
    );
}

#[test]
fn equality_of_xrange_and_explicit() {
    assert_eq!(Range::parse("1.2.x"), Range::parse(">=1.2.0 <1.3.0-0"));
    assert_eq!(Range::parse("1.x"), Range::parse(">=1.0.0 <2.0.0-0"));
    assert_eq!(Range::parse("*"), Range::parse(">=0.0.0"));
}

#[test]
fn equality_of_tilde_range_and_explicit() {
    // Tilde upper bounds carry the `-0` pre-release exclusion per the bound-derivation
    // rules, so they do not compare equal to a bare `<` of the next minor.
    assert_eq!(
        Range::parse("~1.2.3"),
        Range::parse(">=1.2.3 <1.3.0-0")
    );
    assert_ne!(Range::parse("~1.2.3"), Range::parse(">=1.2.3 <1.3.0"));
}

#[test]
fn equality_of_caret_range_and_explicit() {
    assert_eq!(Range::parse("^1.2.3"), Range::parse(">=1.2.3 <2.0.0-0"));
    assert_eq!(Range::parse("^0.2.3"), Range::parse(">=0.2.3 <0.3.0-0"));
}

#[test]
fn different_orderings_compare_equal_once_normalized() {
    assert_eq!(
        Range::parse("1.2.3 || 2.0.0"),
        Range::parse("2.0.0 || 1.2.3")
    );
    assert_eq!(
        Range::parse(">1.2.3 <2.0.0"),
        Range::parse("<2.0.0 >1.2.3")
    );
}

#[test]
fn syntactically_different_equivalent_ranges_compare_unequal() {
    // Normalization is structural, not semantic: `^1.2.3` and its expanded explicit form
    // admit the same set but are different ranges until/unless explicitly combined above.
    assert_ne!(Range::parse("^1.2.3"), Range::parse(">=1.2.3 <1.3.0"));
}
