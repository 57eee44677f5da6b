use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::range::ast::ComparatorNode;
use crate::range::bounds::{Term, TermKind, lower_bound, upper_bound};
use crate::range::lexer::{Op, PartialVersion, Token};
use crate::version::Version;

/// Parses a full token stream into the flat sequence of top-level alternatives described in
/// §3 ("a range: a sequence of top-level alternatives, implicitly OR-combined").
pub(crate) fn parse_range_set(tokens: &[Token]) -> Result<Vec<ComparatorNode>, Error> {
    if tokens.is_empty() {
        return Ok(vec![ComparatorNode::Ge(Version::min())]);
    }

    let mut alternatives = vec![];
    let mut pos = 0;

    loop {
        let (node, next) = parse_range(tokens, pos)?;
        alternatives.push(node);
        pos = next;

        if pos >= tokens.len() {
            break;
        }

        match tokens[pos] {
            Token::LogicalOr => pos += 1,
            _ => return Err(Error::UnexpectedToken),
        }
    }

    Ok(alternatives)
}

fn parse_range(tokens: &[Token], pos: usize) -> Result<(ComparatorNode, usize), Error> {
    if let Some(Token::Partial(a)) = tokens.get(pos) {
        if matches!(tokens.get(pos + 1), Some(Token::Dash)) {
            return match tokens.get(pos + 2) {
                Some(Token::Partial(b)) => Ok((build_hyphen(a, b), pos + 3)),
                _ => Err(Error::EmptyHyphenEndpoint),
            };
        }
    }

    let mut comparators = vec![];
    let mut p = pos;

    loop {
        match tokens.get(p) {
            Some(Token::Partial(partial)) => {
                comparators.push(build_simple(TermKind::Bare, partial));
                p += 1;
            }
            Some(Token::CaretPartial(partial)) => {
                comparators.push(build_simple(TermKind::Caret, partial));
                p += 1;
            }
            Some(Token::TildePartial(partial)) => {
                comparators.push(build_simple(TermKind::Tilde, partial));
                p += 1;
            }
            Some(Token::OpPartial(op, partial)) => {
                comparators.push(build_op(*op, partial));
                p += 1;
            }
            _ => break,
        }
    }

    if comparators.is_empty() {
        return Err(Error::UnexpectedToken);
    }

    if comparators.len() == 1 {
        Ok((comparators.into_iter().next().unwrap(), p))
    } else {
        Ok((ComparatorNode::and(comparators), p))
    }
}

fn build_simple(kind: TermKind, partial: &PartialVersion) -> ComparatorNode {
    let term = Term { kind, partial };
    let lo = lower_bound(&term);
    let hi = upper_bound(&term);

    if lo == hi {
        ComparatorNode::Eq(lo)
    } else if hi == Version::max() {
        ComparatorNode::Ge(lo)
    } else {
        ComparatorNode::and(vec![ComparatorNode::Ge(lo), ComparatorNode::Lt(hi)])
    }
}

fn build_op(op: Op, partial: &PartialVersion) -> ComparatorNode {
    let lo = lower_bound(&Term {
        kind: TermKind::Cmp(op),
        partial,
    });

    match op {
        Op::Eq => ComparatorNode::Eq(lo),
        Op::Lt => ComparatorNode::Lt(lo),
        Op::Le => ComparatorNode::Le(lo),
        Op::Gt => ComparatorNode::Gt(lo),
        Op::Ge => ComparatorNode::Ge(lo),
    }
}

fn build_hyphen(a: &PartialVersion, b: &PartialVersion) -> ComparatorNode {
    let lo = lower_bound(&Term {
        kind: TermKind::Bare,
        partial: a,
    });

    let (hi, hi_inclusive) = if b.full_version {
        (
            lower_bound(&Term {
                kind: TermKind::Bare,
                partial: b,
            }),
            true,
        )
    } else {
        (
            upper_bound(&Term {
                kind: TermKind::Bare,
                partial: b,
            }),
            false,
        )
    };

    let (lo, hi, hi_inclusive) = if lo > hi {
        (hi, lo, true)
    } else {
        (lo, hi, hi_inclusive)
    };

    if lo == hi {
        ComparatorNode::Eq(lo)
    } else if hi_inclusive {
        ComparatorNode::and(vec![ComparatorNode::Ge(lo), ComparatorNode::Le(hi)])
    } else {
        ComparatorNode::and(vec![ComparatorNode::Ge(lo), ComparatorNode::Lt(hi)])
    }
}

/// Flattens nested `or` subtrees into a single list of alternatives and sorts both the
/// alternatives and each `and` node's children into the canonical order of §4.4, so that
/// equal ranges written differently normalize to the same sequence. See §4.5.
pub(crate) fn normalize(alternatives: Vec<ComparatorNode>) -> Vec<ComparatorNode> {
    let mut flat = vec![];
    for alternative in alternatives {
        flatten(alternative, &mut flat);
    }

    let mut flat: Vec<ComparatorNode> = flat.into_iter().map(sort_and_children).collect();
    flat.sort();
    flat
}

fn flatten(node: ComparatorNode, out: &mut Vec<ComparatorNode>) {
    match node {
        ComparatorNode::Or(children) => {
            for child in children {
                flatten(child, out);
            }
        }
        other => out.push(other),
    }
}

fn sort_and_children(node: ComparatorNode) -> ComparatorNode {
    match node {
        ComparatorNode::And(mut children) => {
            children.sort();
            ComparatorNode::And(children)
        }
        other => other,
    }
}
