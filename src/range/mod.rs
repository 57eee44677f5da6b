use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};

mod ast;
mod bounds;
mod lexer;
mod parser;

use ast::ComparatorNode;
use lexer::Lexer;

use crate::error::Error;
use crate::version::Version;

/// A parsed, normalized npm-style version range: a sequence of top-level alternatives,
/// implicitly OR-combined, each either a single comparator or an AND of comparators.
///
/// ## Example
///
/// ```rust
/// use rangevers::{Range, Version};
///
/// let range = Range::parse(">1.2.3 <2.0.0");
///
/// assert!(range.satisfies(&Version::parse("1.5.0")));
/// assert!(!range.satisfies(&Version::parse("2.0.0")));
/// ```
#[derive(Debug, Clone)]
pub struct Range {
    alternatives: Vec<ComparatorNode>,
    valid: bool,
}

impl Range {
    /// Parses a range string. Never panics and never returns a `Result`: on failure the
    /// returned value has [`Range::ok`] equal to `false`.
    pub fn parse(range: &str) -> Self {
        Self::try_parse(range).unwrap_or_else(|_| Self::invalid())
    }

    /// Parses a range string, returning the specific [`Error`] on failure.
    pub fn try_parse(range: &str) -> Result<Self, Error> {
        let tokens = Lexer::tokenize(range)?;
        let alternatives = parser::parse_range_set(&tokens)?;

        Ok(Self {
            alternatives: parser::normalize(alternatives),
            valid: true,
        })
    }

    fn invalid() -> Self {
        Self {
            alternatives: Vec::new(),
            valid: false,
        }
    }

    /// Whether this value originated from a successful parse.
    pub fn ok(&self) -> bool {
        self.valid
    }

    /// Whether `v` lies in the set of versions this range admits. A range for which
    /// [`Range::ok`] is false satisfies no version.
    pub fn satisfies(&self, v: &Version) -> bool {
        self.alternatives.iter().any(|alt| alt.eval(v))
    }

    /// The logical negation of [`Range::satisfies`].
    pub fn outside(&self, v: &Version) -> bool {
        !self.satisfies(v)
    }

    /// The infimum of the set of versions this range admits, or the invalid sentinel if the
    /// range is invalid or admits nothing.
    pub fn min(&self) -> Version {
        self.alternatives
            .iter()
            .filter_map(ComparatorNode::bounds)
            .map(|(lo, _)| lo)
            .fold(None, |acc: Option<Version>, lo| match acc {
                None => Some(lo),
                Some(current) => Some(if lo < current { lo } else { current }),
            })
            .unwrap_or_else(Version::invalid)
    }

    /// The supremum of the set of versions this range admits, or the invalid sentinel if the
    /// range is invalid or admits nothing.
    pub fn max(&self) -> Version {
        self.alternatives
            .iter()
            .filter_map(ComparatorNode::bounds)
            .map(|(_, hi)| hi)
            .fold(None, |acc: Option<Version>, hi| match acc {
                None => Some(hi),
                Some(current) => Some(if hi > current { hi } else { current }),
            })
            .unwrap_or_else(Version::invalid)
    }

    /// The greatest version in `versions` that satisfies this range, or the invalid sentinel
    /// if none do. The first satisfier wins ties among equal versions.
    pub fn max_satisfying(&self, versions: &[Version]) -> Version {
        let mut best: Option<&Version> = None;

        for v in versions {
            if !self.satisfies(v) {
                continue;
            }

            best = Some(match best {
                None => v,
                Some(current) if v > current => v,
                Some(current) => current,
            });
        }

        best.cloned().unwrap_or_else(Version::invalid)
    }

    /// The least version in `versions` that satisfies this range, or the invalid sentinel if
    /// none do. The first satisfier wins ties among equal versions.
    pub fn min_satisfying(&self, versions: &[Version]) -> Version {
        let mut best: Option<&Version> = None;

        for v in versions {
            if !self.satisfies(v) {
                continue;
            }

            best = Some(match best {
                None => v,
                Some(current) if v < current => v,
                Some(current) => current,
            });
        }

        best.cloned().unwrap_or_else(Version::invalid)
    }
}

impl PartialEq for Range {
    /// Structural equality of the normalized AST; see §4.5 and §8: two range strings that
    /// normalize to the same alternatives compare equal.
    fn eq(&self, other: &Self) -> bool {
        self.alternatives == other.alternatives
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if !self.valid {
            return write!(f, "<invalid>");
        }

        write!(
            f,
            "{}",
            self.alternatives
                .iter()
                .map(ComparatorNode::to_range_string)
                .collect::<Vec<String>>()
                .join(" || ")
        )
    }
}
