#![crate_name = "rangevers"]
#![no_std]

//! # rangevers
//!
//! A parser and query engine for [Semantic Versioning 2.0.0](https://semver.org/) strings and
//! npm-style version ranges.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! rangevers = "0.1.0"
//! ```
//!
//! ## Parsing versions
//!
//! Version strings are parsed, following the strict SemVer 2.0.0 grammar, to produce a
//! [`Version`]. Parsing never panics and never surfaces a `Result` at this boundary: a failed
//! parse produces a value whose [`Version::ok`] is `false`. Use [`Version::try_parse`] to get
//! the underlying [`Error`] instead.
//!
//! ```rust
//! use rangevers::{BuildMetadata, Prerelease, PrereleaseComponent, Version};
//!
//! let version = Version::try_parse("10.2.1-alpha.1+build-1")?;
//!
//! assert_eq!(version.major, 10);
//! assert_eq!(version.minor, 2);
//! assert_eq!(version.patch, 1);
//! assert_eq!(
//!     version.prerelease,
//!     Prerelease::Identifier(
//!         vec![
//!             PrereleaseComponent::String("alpha".to_string()),
//!             PrereleaseComponent::Number(1)
//!         ]
//!     )
//! );
//! assert_eq!(version.build_metadata, BuildMetadata::Identifier("build-1".to_string()));
//! # Ok::<(), rangevers::Error>(())
//! ```
//!
//! ### Comparing versions
//!
//! Versions are totally ordered following the SemVer 2.0.0 precedence rules: build metadata
//! never affects comparison, and a pre-release sorts before the release it qualifies.
//!
//! For example: `1.0.0-alpha.1` < `1.0.0-alpha.2` < `1.0.0-beta` < `1.0.0` < `1.0.1`
//!
//! ```rust
//! use rangevers::Version;
//!
//! let version_1 = Version::parse("1.0.0");
//! let version_1_0_1_alpha_9 = Version::parse("1.0.1-alpha.9");
//! let version_1_0_1_beta_10 = Version::parse("1.0.1-beta.10");
//! let version_1_0_1 = Version::parse("1.0.1");
//!
//! assert_ne!(version_1, version_1_0_1);
//! assert!(version_1 < version_1_0_1);
//! assert!(version_1_0_1_alpha_9 < version_1_0_1_beta_10);
//! assert!(version_1_0_1_beta_10 < version_1_0_1);
//! ```
//!
//! ### Handling errors
//!
//! While parsing, each byte is read according to the grammar. If a byte violates the grammar,
//! an error is returned identifying what went wrong and, where relevant, which part of the
//! version it occurred in.
//!
//! The error is eagerly returned: only the **first** violation encountered is reported, even
//! if the string has more than one.
//!
//! ```rust
//! use rangevers::{Error, PartType, Version};
//!
//! let invalid_preceding_zero = Version::try_parse("1.001.0");
//! let invalid_character = Version::try_parse("abc.1.0");
//!
//! assert!(invalid_preceding_zero.is_err());
//! assert!(invalid_character.is_err());
//!
//! assert_eq!(invalid_preceding_zero, Err(Error::InvalidPrecedingZero(PartType::Minor)));
//! assert_eq!(invalid_character, Err(Error::InvalidCharacter(PartType::Major)));
//! ```
//!
//! ## Ranges
//!
//! A [`Range`] describes the set of versions an npm-style constraint string admits:
//! wildcards (`*`, `x`, `X`), tilde and caret operators, hyphen ranges, comparison operators,
//! and `||`-combined alternatives.
//!
//! ```rust
//! use rangevers::{Range, Version};
//!
//! let range = Range::parse("^1.2.3 || ^2.0.0");
//!
//! assert!(range.satisfies(&Version::parse("1.5.0")));
//! assert!(range.satisfies(&Version::parse("2.5.0")));
//! assert!(!range.satisfies(&Version::parse("3.0.0")));
//! ```

extern crate alloc;

pub(crate) mod component;
pub(crate) mod dialect;
pub(crate) mod error;
pub(crate) mod range;
pub(crate) mod version;

pub use component::*;
pub use dialect::Dialect;
pub use error::Error;
pub use range::Range;
pub use version::*;
