//! Walking and rewriting chains of same-kind boolean operators.
//!
//! A chain is a maximal run of `&&` (or `||`) nodes. Its leaves are the
//! operands that are not themselves a node of the chain's kind, numbered left
//! to right. `a && b && c` parses as `(a && b) && c`, a chain of two nodes with
//! three leaves.

use std::rc::Rc;

use crate::node::{Node, NodeKind};
use crate::parent::ParentMap;

/// Operator a chain is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    And,
    Or,
}

impl ChainKind {
    /// Left and right operands when `node` is a node of this kind.
    pub fn operands(self, node: &Node) -> Option<(&Rc<Node>, &Rc<Node>)> {
        match (self, &node.kind) {
            (ChainKind::And, NodeKind::BooleanAnd { left, right })
            | (ChainKind::Or, NodeKind::BooleanOr { left, right }) => Some((left, right)),
            _ => None,
        }
    }

    pub fn matches(self, node: &Node) -> bool {
        self.operands(node).is_some()
    }

    /// True when `node` is the topmost node of its chain: it is of this kind
    /// and its parent, if any, is not.
    pub fn is_anchor(self, node: &Node, parents: &ParentMap) -> bool {
        self.matches(node)
            && !parents
                .find_parent(node)
                .is_some_and(|parent| self.matches(parent))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ChainKind::And => "&&",
            ChainKind::Or => "||",
        }
    }

    /// Build a chain node of this kind carrying `template`'s span.
    fn rebuild(self, template: &Node, left: Rc<Node>, right: Rc<Node>) -> Rc<Node> {
        let kind = match self {
            ChainKind::And => NodeKind::BooleanAnd { left, right },
            ChainKind::Or => NodeKind::BooleanOr { left, right },
        };
        Rc::new(Node::with_span(kind, template.span))
    }
}

/// Number of leaves in the chain rooted at `node`.
///
/// # Panics
///
/// Panics if a leaf of the chain is not an expression.
pub fn count_leaves(chain: ChainKind, node: &Node) -> usize {
    let mut count = 0;
    count_into(chain, node, &mut count);
    count
}

fn count_into(chain: ChainKind, node: &Node, count: &mut usize) {
    if let Some((left, right)) = chain.operands(node) {
        count_into(chain, left, count);
        count_into(chain, right, count);
    } else {
        expect_leaf(chain, node);
        *count += 1;
    }
}

/// Rebuild the chain with the leaf at `target` negated.
///
/// Every other leaf is shared with the input. A leaf that already is a
/// negation loses it instead of gaining a second one.
///
/// # Panics
///
/// Panics if a leaf of the chain is not an expression.
pub fn negate_leaf_at(chain: ChainKind, node: &Rc<Node>, target: usize) -> Rc<Node> {
    let mut position = 0;
    rebuild_negating(chain, node, target, &mut position)
}

fn rebuild_negating(
    chain: ChainKind,
    node: &Rc<Node>,
    target: usize,
    position: &mut usize,
) -> Rc<Node> {
    if let Some((left, right)) = chain.operands(node) {
        let left = rebuild_negating(chain, left, target, position);
        let right = rebuild_negating(chain, right, target, position);
        return chain.rebuild(node, left, right);
    }

    expect_leaf(chain, node);

    let here = *position;
    *position += 1;

    if here == target {
        negate(node)
    } else {
        Rc::clone(node)
    }
}

/// Lazily yield one rebuilt chain per leaf, negating leaf 0, then leaf 1, ...
///
/// Leaves are counted up front; each rebuilt tree is only constructed when the
/// iterator is advanced to it.
pub fn negate_each_leaf(chain: ChainKind, node: Rc<Node>) -> impl Iterator<Item = Rc<Node>> {
    let total = count_leaves(chain, &node);
    (0..total).map(move |target| negate_leaf_at(chain, &node, target))
}

/// Rebuild the chain with every leaf negated, collapsing existing negations.
///
/// # Panics
///
/// Panics if a leaf of the chain is not an expression.
pub fn negate_all_leaves(chain: ChainKind, node: &Rc<Node>) -> Rc<Node> {
    match chain.operands(node) {
        Some((left, right)) => {
            let left = negate_all_leaves(chain, left);
            let right = negate_all_leaves(chain, right);
            chain.rebuild(node, left, right)
        }
        None => {
            expect_leaf(chain, node);
            negate(node)
        }
    }
}

/// `!expr`, or the inner operand when `expr` is already a negation.
fn negate(expr: &Rc<Node>) -> Rc<Node> {
    match &expr.kind {
        NodeKind::BooleanNot { expr: inner } => Rc::clone(inner),
        _ => Node::negation(Rc::clone(expr)),
    }
}

fn expect_leaf(chain: ChainKind, node: &Node) {
    assert!(
        node.is_expression(),
        "malformed `{}` chain: found {} node where an operand expression was expected",
        chain.symbol(),
        node.kind_name()
    );
}
