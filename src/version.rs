use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{Debug, Display};

use crate::component::{BuildMetadata, PartType, Prerelease, PrereleaseComponent};
use crate::dialect;
use crate::dialect::Dialect::Standard;
use crate::dialect::{CapturedBytes, Dialect, DialectParser, NextPartType, RemainingUnparsedBytes};
use crate::error::Error;

#[derive(Debug, Clone)]
/// A parsed, immutable, totally ordered Semantic Version.
///
/// Instances of `Version` can be compared against one another, and formatted as a string.
///
/// An invalid input never panics and never surfaces a `Result` at this boundary: it produces
/// a `Version` whose [`Version::ok`] is `false`. Callers who want to know *why* parsing failed
/// can use [`Version::try_parse`] instead, which returns the underlying [`Error`].
///
/// ## Example
///
/// ```rust
/// use rangevers::Version;
/// let version = Version::parse("0.1.4-beta");
///
/// assert_eq!(version.to_string(), "0.1.4-beta".to_string())
/// ```
pub struct Version {
    dialect: Dialect,

    /// The major version number.
    pub major: u64,

    /// The minor version number.
    pub minor: u64,

    /// The patch version number.
    pub patch: u64,

    /// The prerelease identifier, if provided.
    pub prerelease: Prerelease,

    /// The build metadata, if provided.
    pub build_metadata: BuildMetadata,

    /// Whether the value was produced by a successful parse (or a sentinel/numeric
    /// constructor, which always succeed). Queries against a `Version` for which this
    /// is `false` are defined but not meaningful (see [`Version::ok`]).
    valid: bool,
}

impl Version {
    /// Parse a string into a `Version`, following the strict SemVer 2.0.0 grammar.
    ///
    /// Never panics and never returns a `Result`: on failure the returned value has
    /// [`Version::ok`] equal to `false`. Use [`Version::try_parse`] for the underlying error.
    ///
    /// ```
    /// use rangevers::Version;
    /// let version = Version::parse("0.1.4-beta");
    /// assert_eq!(version.to_string(), "0.1.4-beta".to_string())
    /// ```
    pub fn parse(version: &str) -> Self {
        Self::try_parse(version).unwrap_or_else(|_| Self::invalid())
    }

    /// Parse a string into a `Version`, returning the specific [`Error`] on failure.
    pub fn try_parse(version: &str) -> Result<Self, Error> {
        Self::parse_with_dialect(version, Standard)
    }

    /// Parse a string into a `Version`, trimming surrounding whitespace, stripping a leading
    /// non-digit prefix (`v`, `>=`, `^`, `~`, ...), and discarding internal whitespace between
    /// lexical elements before strict parsing.
    ///
    /// This is a convenience form for CLI-style callers that accept user-typed version
    /// strings; the strict [`Version::parse`] remains the canonical entry point.
    pub fn parse_loose(version: &str) -> Self {
        Self::try_parse(&Self::relax(version)).unwrap_or_else(|_| Self::invalid())
    }

    fn relax(version: &str) -> String {
        let without_space: String = version.chars().filter(|c| !c.is_whitespace()).collect();
        let first_digit = without_space
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(0);

        without_space[first_digit..].to_string()
    }

    /// Construct a `Version` directly from its numeric components, with no prerelease or
    /// build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Prerelease::Empty,
            build_metadata: BuildMetadata::Empty,
            valid: true,
            dialect: Standard,
        }
    }

    /// Construct a `Version` directly from its numeric components and a prerelease
    /// identifier.
    pub fn with_prerelease(major: u64, minor: u64, patch: u64, prerelease: Prerelease) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease,
            build_metadata: BuildMetadata::Empty,
            valid: true,
            dialect: Standard,
        }
    }

    /// The smallest version in the totally ordered set: `0.0.0`.
    pub fn min() -> Self {
        Self::new(0, 0, 0)
    }

    /// The largest version in the totally ordered set: all numeric components at the type's
    /// maximum.
    pub fn max() -> Self {
        Self::new(u64::MAX, u64::MAX, u64::MAX)
    }

    /// A sentinel distinct from any successfully parsed or constructed version, returned by
    /// queries that found nothing (see [`crate::Range::max_satisfying`]).
    pub fn invalid() -> Self {
        Self {
            major: 0,
            minor: 0,
            patch: 0,
            prerelease: Prerelease::Empty,
            build_metadata: BuildMetadata::Empty,
            valid: false,
            dialect: Standard,
        }
    }

    /// Whether this value originated from a successful parse or constructor.
    pub fn ok(&self) -> bool {
        self.valid
    }

    /// The canonical string form of this version, or `<invalid>` if [`Version::ok`] is false.
    pub fn str(&self) -> String {
        self.to_string()
    }

    /// Three-way comparison, returning `-1`, `0`, or `1`.
    ///
    /// Versions originating from different [`Dialect`]s are not comparable; such a pair is
    /// treated as equal, the same way [`PartialEq`] treats them as unequal and `false`-leaning
    /// rather than panicking.
    pub fn compare(&self, other: &Self) -> i8 {
        match self.partial_cmp(other) {
            Some(Ordering::Less) => -1,
            Some(Ordering::Greater) => 1,
            Some(Ordering::Equal) | None => 0,
        }
    }

    fn parse_with_dialect(version: &str, dialect: Dialect) -> Result<Self, Error> {
        let version_bytes = version.as_bytes();

        let (mut major, mut minor, mut patch, mut prerelease, mut build_metadata) =
            (vec![], vec![], vec![], vec![], vec![]);

        let mut current_part_type = PartType::Major;
        let mut remaining = version_bytes;
        loop {
            let part = Self::parse_part(remaining, dialect, current_part_type)?;

            let (part, r, next_part_type) = part;

            match current_part_type {
                PartType::Major => major = part,
                PartType::Minor => minor = part,
                PartType::Patch => patch = part,
                PartType::Prerelease => prerelease.push(part),
                PartType::BuildMetadata => build_metadata = part,
            }

            if next_part_type.is_none() {
                break;
            }

            remaining = r;
            current_part_type = next_part_type.unwrap();
        }

        // The byte scanner above only rejects characters that are individually invalid for
        // the part being scanned; it does not by itself reject a *truncated* grammar (a
        // dangling dot, a bare major version, an empty prerelease/build identifier). The
        // strict SemVer grammar requires major, minor and patch to all be present, and every
        // dot-separated identifier to be non-empty, so that is validated here.
        if matches!(current_part_type, PartType::Major | PartType::Minor) {
            return Err(Error::UnexpectedEnd);
        }
        if major.is_empty() {
            return Err(Error::UnexpectedEnd);
        }
        if minor.is_empty() {
            return Err(Error::UnexpectedEnd);
        }
        if patch.is_empty() {
            return Err(Error::UnexpectedEnd);
        }
        if matches!(current_part_type, PartType::BuildMetadata) && build_metadata.is_empty() {
            return Err(Error::UnexpectedEnd);
        }
        for part in &prerelease {
            if part.is_empty() {
                return Err(Error::UnexpectedEnd);
            }
            if part.len() > 1 && part[0] == b'0' && part.iter().all(u8::is_ascii_digit) {
                return Err(Error::InvalidPrecedingZero(PartType::Prerelease));
            }
        }

        Ok(Self::new_parsed(
            Self::digits_to_u64(&major),
            Self::digits_to_u64(&minor),
            Self::digits_to_u64(&patch),
            if prerelease.is_empty() {
                None
            } else {
                Some(
                    prerelease
                        .iter()
                        .map(|part| {
                            if part.iter().all(|i| (&b'0'..=&b'9').contains(&i)) {
                                PrereleaseComponent::Number(Self::digits_to_u64(part))
                            } else {
                                PrereleaseComponent::String(
                                    alloc::str::from_utf8(&part[..]).unwrap().to_string(),
                                )
                            }
                        })
                        .collect(),
                )
            },
            if build_metadata.is_empty() {
                None
            } else {
                Some(
                    alloc::str::from_utf8(&build_metadata[..])
                        .unwrap()
                        .to_string(),
                )
            },
            dialect,
        ))
    }

    fn digits_to_u64(digits: &[u8]) -> u64 {
        alloc::str::from_utf8(digits)
            .unwrap()
            .parse::<u64>()
            .unwrap_or_default()
    }

    /// Progressively parse and return one particular part of a version string.
    ///
    /// The end point of a part is determined by the chosen dialect.
    fn parse_part(
        version_bytes: &[u8],
        dialect: Dialect,
        current_part: PartType,
    ) -> Result<(CapturedBytes, &RemainingUnparsedBytes, NextPartType), Error> {
        let mut part = vec![];

        for (i, byte) in version_bytes.iter().enumerate() {
            let next_part = match dialect {
                Standard => dialect::Standard::parse_byte(
                    byte,
                    (current_part, &part),
                    &version_bytes[i + 1..],
                ),
            }?;

            if next_part.is_some() {
                return Ok((part, &version_bytes[i + 1..], next_part));
            }

            part.push(byte.to_owned());
        }

        Ok((part, &[], None))
    }

    fn new_parsed(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<Vec<PrereleaseComponent>>,
        build_metadata: Option<String>,
        dialect: Dialect,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: prerelease.map_or(Prerelease::Empty, Prerelease::Identifier),
            build_metadata: build_metadata.map_or(BuildMetadata::Empty, BuildMetadata::Identifier),
            valid: true,
            dialect,
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        if self.dialect != other.dialect {
            // Only versions originating from the same dialect can be compared. This
            // prevents issues with inconsistent comparisons based on comparator order
            return false;
        }

        match self.dialect {
            Standard => dialect::Standard::eq(self, other),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dialect != other.dialect {
            return None;
        }

        Some(match self.dialect {
            Standard => dialect::Standard::cmp(self, other),
        })
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !self.valid {
            return write!(f, "<invalid>");
        }

        write!(
            f,
            "{}",
            match self.dialect {
                Standard => dialect::Standard::format(self),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use proptest::prelude::*;

    use crate::error::Error;
    use crate::version::{BuildMetadata, PartType, Prerelease, PrereleaseComponent, Version};

    #[test]
    fn parsing_minimal_version_is_rejected() {
        // Strict SemVer requires all three numeric components.
        assert!(!Version::parse("1").ok());
        assert!(!Version::parse("1.2").ok());
    }

    #[test]
    fn parsing_only_version() {
        let version = Version::parse("1.2.2");

        assert!(version.ok());
        assert_eq!(version.major, 1);
        assert_eq!(version.minor, 2);
        assert_eq!(version.patch, 2);
    }

    #[test]
    fn parsing_version() {
        let version = Version::parse("12.19.1-alpha.12+build1234");

        assert!(version.ok());
        assert_eq!(version.major, 12);
        assert_eq!(version.minor, 19);
        assert_eq!(version.patch, 1);
        assert_eq!(
            version.prerelease,
            Prerelease::Identifier(vec![
                PrereleaseComponent::String("alpha".to_string()),
                PrereleaseComponent::Number(12)
            ])
        );
        assert_eq!(
            version.build_metadata,
            BuildMetadata::Identifier("build1234".to_string())
        );

        assert_eq!("12.19.1-alpha.12+build1234", version.to_string());
    }

    #[test]
    fn parsing_version_with_leading_major_zero() {
        let version = Version::parse("0.1.0");

        assert!(version.ok());
        assert_eq!(version.major, 0);
        assert_eq!(version.minor, 1);
        assert_eq!(version.patch, 0);
    }

    #[test]
    fn parsing_version_with_only_build_metadata() {
        let version = Version::parse("0.1.12+build.1234");

        assert!(version.ok());
        assert_eq!(version.major, 0);
        assert_eq!(version.minor, 1);
        assert_eq!(version.patch, 12);
        assert_eq!(version.prerelease, Prerelease::Empty);
        assert_eq!(
            version.build_metadata,
            BuildMetadata::Identifier("build.1234".to_string())
        );
    }

    #[test]
    fn parsing_version_with_preceding_zero_is_invalid() {
        let version = Version::try_parse("12.019.1");

        let Err(error) = version else {
            panic!("Parsing should have returned an error")
        };

        assert_eq!(error, Error::InvalidPrecedingZero(PartType::Minor));
        assert!(!Version::parse("12.019.1").ok());
    }

    #[test]
    fn dangling_qualifiers_are_invalid() {
        assert!(!Version::parse("1.2.3-").ok());
        assert!(!Version::parse("1.2.3+").ok());
        assert!(!Version::parse("1.2.").ok());
        assert!(!Version::parse(".2.3").ok());
        assert!(!Version::parse("1.2.3-01").ok());
    }

    #[test]
    fn sentinels_are_well_ordered() {
        assert!(Version::min() < Version::new(0, 0, 1));
        assert!(Version::new(u64::MAX - 1, u64::MAX, u64::MAX) < Version::max());
        assert!(!Version::invalid().ok());
    }

    #[test]
    fn loose_parsing_strips_prefixes_and_whitespace() {
        for input in [
            "  1.2.3", "1. 2.3", "1.2 .3", "1 . 2 . 3", "1.2.3  ", "v1.2.3", ">=1.2.3",
        ] {
            let version = Version::parse_loose(input);
            assert!(version.ok(), "expected {input:?} to parse loosely");
            assert_eq!(version.major, 1);
            assert_eq!(version.minor, 2);
            assert_eq!(version.patch, 3);
        }
    }

    #[test]
    fn three_way_compare() {
        assert_eq!(
            Version::parse("1.0.0").compare(&Version::parse("1.0.1")),
            -1
        );
        assert_eq!(Version::parse("1.0.1").compare(&Version::parse("1.0.1")), 0);
        assert_eq!(Version::parse("1.0.1").compare(&Version::parse("1.0.0")), 1);
    }

    #[test]
    fn prerelease_precedes_release() {
        assert!(Version::parse("1.0.0-alpha") < Version::parse("1.0.0"));
    }

    proptest! {
        #[test]
        fn parses_various_valid_version_strings(
            version in "(0|[1-9][0-9]*)[.](0|[1-9][0-9]*)[.](0|[1-9][0-9]*)([-](0|[1-9A-Za-z-][0-9A-Za-z-]*)([.][0-9A-Za-z-]+)*)?([+][0-9A-Za-z-]+([.][0-9A-Za-z-]+)*)?"
        ) {
            let version = Version::try_parse(&version);

            assert!(version.is_ok());
        }

        #[test]
        fn parse_then_format_then_parse_round_trips(
            version in "(0|[1-9][0-9]*)[.](0|[1-9][0-9]*)[.](0|[1-9][0-9]*)([-](0|[1-9A-Za-z-][0-9A-Za-z-]*)([.][0-9A-Za-z-]+)*)?"
        ) {
            let parsed = Version::parse(&version);
            assert!(parsed.ok());

            let reparsed = Version::parse(&parsed.to_string());
            assert!(reparsed.ok());
            assert_eq!(parsed, reparsed);
        }
    }
}
