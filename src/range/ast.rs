use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::range::bounds::{predecessor, successor};
use crate::version::Version;

/// A node in the comparator AST described in §4.4: an `and`/`or` of children, or a leaf
/// comparator holding a concrete version.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ComparatorNode {
    And(Vec<ComparatorNode>),
    Or(Vec<ComparatorNode>),
    Eq(Version),
    Lt(Version),
    Le(Version),
    Gt(Version),
    Ge(Version),
}

impl ComparatorNode {
    /// Internal-node factories require at least two children, per §4.4.
    pub(crate) fn and(children: Vec<ComparatorNode>) -> Self {
        debug_assert!(children.len() >= 2, "and() requires at least two children");
        ComparatorNode::And(children)
    }

    pub(crate) fn or(children: Vec<ComparatorNode>) -> Self {
        debug_assert!(children.len() >= 2, "or() requires at least two children");
        ComparatorNode::Or(children)
    }

    pub(crate) fn eval(&self, v: &Version) -> bool {
        match self {
            ComparatorNode::And(children) => children.iter().all(|c| c.eval(v)),
            ComparatorNode::Or(children) => children.iter().any(|c| c.eval(v)),
            ComparatorNode::Eq(bound) => v == bound,
            ComparatorNode::Lt(bound) => v < bound,
            ComparatorNode::Le(bound) => v <= bound,
            ComparatorNode::Gt(bound) => v > bound,
            ComparatorNode::Ge(bound) => v >= bound,
        }
    }

    /// Calls `visit` for this node, then (pre-order) its children.
    pub(crate) fn visit_pre_order<F: FnMut(&ComparatorNode)>(&self, visit: &mut F) {
        visit(self);
        if let ComparatorNode::And(children) | ComparatorNode::Or(children) = self {
            for child in children {
                child.visit_pre_order(visit);
            }
        }
    }

    /// Calls `visit` for this node's children first, then this node (post-order).
    pub(crate) fn visit_post_order<F: FnMut(&ComparatorNode)>(&self, visit: &mut F) {
        if let ComparatorNode::And(children) | ComparatorNode::Or(children) = self {
            for child in children {
                child.visit_post_order(visit);
            }
        }
        visit(self);
    }

    /// The interval of versions this node admits, used by the query engine's `min`/`max`.
    /// Returns `None` when the node is internally contradictory (an `and` whose children's
    /// bounds don't overlap).
    pub(crate) fn bounds(&self) -> Option<(Version, Version)> {
        match self {
            ComparatorNode::Eq(v) => Some((v.clone(), v.clone())),
            ComparatorNode::Lt(v) => Some((Version::min(), predecessor(v))),
            ComparatorNode::Le(v) => Some((Version::min(), v.clone())),
            ComparatorNode::Gt(v) => Some((successor(v), Version::max())),
            ComparatorNode::Ge(v) => Some((v.clone(), Version::max())),
            ComparatorNode::And(children) => {
                let mut lo = Version::min();
                let mut hi = Version::max();

                for child in children {
                    let (child_lo, child_hi) = child.bounds()?;
                    if child_lo > lo {
                        lo = child_lo;
                    }
                    if child_hi < hi {
                        hi = child_hi;
                    }
                }

                if lo > hi { None } else { Some((lo, hi)) }
            }
            ComparatorNode::Or(children) => {
                children
                    .iter()
                    .filter_map(ComparatorNode::bounds)
                    .fold(None, |acc, (clo, chi)| match acc {
                        None => Some((clo, chi)),
                        Some((alo, ahi)) => Some((
                            if clo < alo { clo } else { alo },
                            if chi > ahi { chi } else { ahi },
                        )),
                    })
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            ComparatorNode::Eq(_)
            | ComparatorNode::Lt(_)
            | ComparatorNode::Le(_)
            | ComparatorNode::Gt(_)
            | ComparatorNode::Ge(_) => 0,
            ComparatorNode::And(_) | ComparatorNode::Or(_) => 1,
        }
    }

    fn version(&self) -> Option<&Version> {
        match self {
            ComparatorNode::Eq(v)
            | ComparatorNode::Lt(v)
            | ComparatorNode::Le(v)
            | ComparatorNode::Gt(v)
            | ComparatorNode::Ge(v) => Some(v),
            _ => None,
        }
    }

    fn children(&self) -> Option<&[ComparatorNode]> {
        match self {
            ComparatorNode::And(children) | ComparatorNode::Or(children) => Some(children),
            _ => None,
        }
    }

    pub(crate) fn to_range_string(&self) -> String {
        match self {
            ComparatorNode::Eq(v) => format!("={v}"),
            ComparatorNode::Lt(v) => format!("<{v}"),
            ComparatorNode::Le(v) => format!("<={v}"),
            ComparatorNode::Gt(v) => format!(">{v}"),
            ComparatorNode::Ge(v) => format!(">={v}"),
            ComparatorNode::And(children) => children
                .iter()
                .map(ComparatorNode::to_range_string)
                .collect::<Vec<_>>()
                .join(" "),
            ComparatorNode::Or(children) => children
                .iter()
                .map(ComparatorNode::to_range_string)
                .collect::<Vec<_>>()
                .join(" || "),
        }
    }
}

impl Eq for ComparatorNode {}

impl PartialOrd for ComparatorNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComparatorNode {
    /// Leaves strictly precede internal nodes; leaves order by their version; internal
    /// nodes order lexicographically by their child sequence. See §4.4.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal => {}
            order => return order,
        }

        if let (Some(a), Some(b)) = (self.version(), other.version()) {
            return a.partial_cmp(b).unwrap_or(Ordering::Equal);
        }

        if let (Some(a), Some(b)) = (self.children(), other.children()) {
            for (x, y) in a.iter().zip(b.iter()) {
                match x.cmp(y) {
                    Ordering::Equal => continue,
                    order => return order,
                }
            }
            return a.len().cmp(&b.len());
        }

        Ordering::Equal
    }
}
