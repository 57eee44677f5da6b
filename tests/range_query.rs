use rangevers::{Range, Version};

fn v(s: &str) -> Version {
    let version = Version::parse(s);
    assert!(version.ok(), "expected '{s}' to parse");
    version
}

#[test]
fn greater_and_less_than_conjoined() {
    let range = Range::parse(">1.2.3 <2.0.0");
    assert!(range.satisfies(&v("1.5.0")));
    assert!(!range.satisfies(&v("2.0.0")));
    assert!(!range.satisfies(&v("1.2.3")));
}

#[test]
fn hyphen_range_inclusive_both_ends() {
    let range = Range::parse("1.2.3 - 2.0.0");
    assert!(range.satisfies(&v("1.2.3")));
    assert!(range.satisfies(&v("2.0.0")));
    assert!(!range.satisfies(&v("2.0.1")));
}

#[test]
fn logical_or_of_exact_versions() {
    let range = Range::parse("1.2.3 || 2.0.0");
    assert!(range.satisfies(&v("1.2.3")));
    assert!(range.satisfies(&v("2.0.0")));
    assert!(!range.satisfies(&v("1.5.0")));
}

#[test]
fn max_satisfying_across_alternatives() {
    let range = Range::parse(">1.2.3 <2.0.0 || 3.0.0");

    assert_eq!(
        range.max_satisfying(&[v("1.2.0"), v("1.5.0"), v("1.11.0")]),
        v("1.11.0")
    );
    assert_eq!(
        range.max_satisfying(&[v("1.2.0"), v("3.0.0"), v("1.11.0")]),
        v("3.0.0")
    );
}

#[test]
fn caret_alternatives_round_trip_and_admit_union() {
    let range = Range::parse("^1.2.3 || ^2.0.0");
    assert_eq!(Range::parse(&range.to_string()), range);

    assert!(range.satisfies(&v("1.5.0")));
    assert!(range.satisfies(&v("2.5.0")));
    assert!(!range.satisfies(&v("3.0.0")));
}

#[test]
fn min_and_max_of_explicit_bounds() {
    assert_eq!(Range::parse("2.0.0").min(), v("2.0.0"));
    assert_eq!(Range::parse("<=2.0.0").min(), Version::min());
    assert_eq!(Range::parse("<2.0.0").min(), Version::min());
    assert_eq!(Range::parse(">2.0.0").min(), v("2.0.1"));
    assert_eq!(Range::parse(">=2.0.0").min(), v("2.0.0"));
    assert_eq!(Range::parse(">=1.2.3 <2.0.0").min(), v("1.2.3"));

    assert_eq!(Range::parse(">1.2.3 <=2.0.0").max(), v("2.0.0"));
    assert_eq!(Range::parse(">=2.0.0").max(), Version::max());

    assert_eq!(Range::parse(">2.0.0-0").min(), v("2.0.0"));
    assert_eq!(Range::parse(">=2.0.0-0").min(), v("2.0.0-0"));
    assert_eq!(Range::parse(">1.2.3 <=2.0.0-0").min(), v("1.2.4"));
    assert_eq!(Range::parse(">1.2.3-0 <=2.0.0").min(), v("1.2.3"));

    assert_eq!(Range::parse("<=2.0.0-0").max(), v("2.0.0-0"));
    assert_eq!(Range::parse(">2.0.0-0").max(), Version::max());
    assert_eq!(Range::parse(">1.2.3 <=2.0.0-0").max(), v("2.0.0-0"));
}

#[test]
fn min_satisfying_with_no_match_is_invalid() {
    let range = Range::parse("^3.0.0");
    let found = range.min_satisfying(&[v("1.0.0"), v("2.0.0")]);
    assert!(!found.ok());
}

#[test]
fn satisfies_outside_are_mutually_exclusive() {
    let range = Range::parse("1.2.3 - 2.0.0 || ^3.0.0");
    for version in ["0.9.0", "1.2.3", "1.9.9", "2.0.1", "3.5.0", "4.0.0"] {
        let version = v(version);
        assert_ne!(range.satisfies(&version), range.outside(&version));
    }
}

#[test]
fn xrange_forms() {
    let range = Range::parse("1.2.x");
    assert!(range.satisfies(&v("1.2.0")));
    assert!(range.satisfies(&v("1.2.9")));
    assert!(!range.satisfies(&v("1.3.0")));

    let range = Range::parse("1.x");
    assert!(range.satisfies(&v("1.0.0")));
    assert!(range.satisfies(&v("1.99.99")));
    assert!(!range.satisfies(&v("2.0.0")));
}
