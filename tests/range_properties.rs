use proptest::prelude::*;
use rangevers::{Range, Version};

proptest! {
    #[test]
    fn satisfies_and_outside_are_always_exclusive(
        major in 0u64..5,
        minor in 0u64..5,
        patch in 0u64..5,
        candidate_major in 0u64..5,
        candidate_minor in 0u64..5,
        candidate_patch in 0u64..5,
    ) {
        let range = Range::parse(&format!("^{major}.{minor}.{patch}"));
        let version = Version::new(candidate_major, candidate_minor, candidate_patch);

        prop_assert_ne!(range.satisfies(&version), range.outside(&version));
    }

    #[test]
    fn normalized_range_string_reparses_to_an_equal_range(
        major in 0u64..20,
        minor in 0u64..20,
        patch in 0u64..20,
    ) {
        let range = Range::parse(&format!("^{major}.{minor}.{patch}"));
        prop_assert!(range.ok());

        let reparsed = Range::parse(&range.to_string());
        prop_assert!(reparsed.ok());
        prop_assert_eq!(range, reparsed);
    }
}
