use crate::component::{Prerelease, PrereleaseComponent};
use crate::range::lexer::{Op, PartialVersion};
use crate::version::Version;

/// The operator governing how a partial version's bounds are derived: a bare term, a caret
/// or tilde term, or an explicit comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TermKind {
    Bare,
    Caret,
    Tilde,
    Cmp(Op),
}

/// One comparator term: an operator paired with the partial version it applies to.
pub(crate) struct Term<'a> {
    pub kind: TermKind,
    pub partial: &'a PartialVersion,
}

fn next_release_prerelease() -> Prerelease {
    Prerelease::Identifier(alloc::vec![PrereleaseComponent::Number(0)])
}

/// Derives the lower bound of a term, following §4.3.
pub(crate) fn lower_bound(term: &Term) -> Version {
    let p = term.partial;

    match (p.major, p.minor, p.patch) {
        (None, _, _) => Version::min(),
        (Some(maj), None, _) => Version::new(maj, 0, 0),
        (Some(maj), Some(min), None) => Version::new(maj, min, 0),
        (Some(maj), Some(min), Some(pat)) => {
            Version::with_prerelease(maj, min, pat, p.prerelease.clone())
        }
    }
}

/// Derives the upper bound of a term, following §4.3.
pub(crate) fn upper_bound(term: &Term) -> Version {
    let p = term.partial;

    let Some(maj) = p.major else {
        return Version::max();
    };

    if term.kind == TermKind::Caret && maj != 0 {
        return Version::with_prerelease(maj + 1, 0, 0, next_release_prerelease());
    }

    let Some(min) = p.minor else {
        return Version::with_prerelease(maj + 1, 0, 0, next_release_prerelease());
    };

    if term.kind == TermKind::Caret && min != 0 {
        return Version::with_prerelease(maj, min + 1, 0, next_release_prerelease());
    }

    let Some(pat) = p.patch else {
        return Version::with_prerelease(maj, min + 1, 0, next_release_prerelease());
    };

    if term.kind == TermKind::Tilde {
        return Version::with_prerelease(maj, min + 1, 0, next_release_prerelease());
    }

    if term.kind == TermKind::Caret && pat != 0 {
        return Version::with_prerelease(maj, min, pat + 1, next_release_prerelease());
    }

    lower_bound(term)
}

/// The version immediately following `v`, dropping any pre-release (used to compute the
/// node-level bound of a `gt` comparator).
pub(crate) fn successor(v: &Version) -> Version {
    if v.prerelease != Prerelease::Empty {
        // v is already the least member of its release family (e.g. `2.0.0-0`); the release
        // itself, at the same patch, is the next version up.
        return Version::new(v.major, v.minor, v.patch);
    }

    Version::new(v.major, v.minor, v.patch.saturating_add(1))
}

/// The version immediately preceding `v` (used to compute the node-level bound of a `lt`
/// comparator): one less than `v`'s patch, with any pre-release stripped.
pub(crate) fn predecessor(v: &Version) -> Version {
    if v.patch > 0 {
        return Version::new(v.major, v.minor, v.patch - 1);
    }

    if v.minor > 0 {
        return Version::new(v.major, v.minor - 1, u64::MAX);
    }

    if v.major > 0 {
        return Version::new(v.major - 1, u64::MAX, u64::MAX);
    }

    Version::min()
}
