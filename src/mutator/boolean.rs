//! Rules over `&&` / `||` chains.

use std::iter;
use std::rc::Rc;

use super::chain::{ChainKind, negate_all_leaves, negate_each_leaf};
use super::{Definition, MutatorCategory, Mutations, Mutator};
use crate::node::Node;
use crate::parent::ParentMap;

/// Negates one operand of a chain at a time, one mutant per operand.
#[derive(Debug, Clone, Copy)]
pub struct SingleSubExprNegation {
    chain: ChainKind,
}

impl SingleSubExprNegation {
    pub const fn new(chain: ChainKind) -> Self {
        Self { chain }
    }
}

impl Mutator for SingleSubExprNegation {
    fn name(&self) -> &'static str {
        match self.chain {
            ChainKind::And => "LogicalAndSingleSubExprNegation",
            ChainKind::Or => "LogicalOrSingleSubExprNegation",
        }
    }

    fn definition(&self) -> Definition {
        let (description, diff) = match self.chain {
            ChainKind::And => (
                "Negates a single sub-expression of an AND (`&&`) chain, one mutant per sub-expression.",
                "- $a = $b && $c;\n+ $a = !$b && $c;",
            ),
            ChainKind::Or => (
                "Negates a single sub-expression of an OR (`||`) chain, one mutant per sub-expression.",
                "- $a = $b || $c;\n+ $a = !$b || $c;",
            ),
        };

        Definition {
            description,
            category: MutatorCategory::OrthogonalReplacement,
            remedies: None,
            diff,
        }
    }

    fn can_mutate(&self, node: &Node, parents: &ParentMap) -> bool {
        self.chain.is_anchor(node, parents)
    }

    fn mutate(&self, node: &Rc<Node>) -> Mutations {
        Box::new(negate_each_leaf(self.chain, Rc::clone(node)))
    }
}

/// Negates every operand of a chain at once, keeping the operator.
#[derive(Debug, Clone, Copy)]
pub struct AllSubExprNegation {
    chain: ChainKind,
}

impl AllSubExprNegation {
    pub const fn new(chain: ChainKind) -> Self {
        Self { chain }
    }
}

impl Mutator for AllSubExprNegation {
    fn name(&self) -> &'static str {
        match self.chain {
            ChainKind::And => "LogicalAndAllSubExprNegation",
            ChainKind::Or => "LogicalOrAllSubExprNegation",
        }
    }

    fn definition(&self) -> Definition {
        let (description, diff) = match self.chain {
            ChainKind::And => (
                "Negates all sub-expressions at once in AND (`&&`). No matter how many sub-expressions, but all should be connected with AND (`&&`) operator.",
                "- $a = $b && $c;\n+ $a = !$b && !$c;",
            ),
            ChainKind::Or => (
                "Negates all sub-expressions at once in OR (`||`). No matter how many sub-expressions, but all should be connected with OR (`||`) operator.",
                "- $a = $b || $c;\n+ $a = !$b || !$c;",
            ),
        };

        Definition {
            description,
            category: MutatorCategory::OrthogonalReplacement,
            remedies: None,
            diff,
        }
    }

    fn can_mutate(&self, node: &Node, parents: &ParentMap) -> bool {
        self.chain.is_anchor(node, parents)
    }

    fn mutate(&self, node: &Rc<Node>) -> Mutations {
        let chain = self.chain;
        let node = Rc::clone(node);
        Box::new(iter::once_with(move || negate_all_leaves(chain, &node)))
    }
}

/// Wraps a whole chain in a single negation.
///
/// Operands are left untouched, so a chain containing `!$b` becomes
/// `!(!$b && $c)` rather than collapsing the inner negation.
#[derive(Debug, Clone, Copy)]
pub struct ConditionNegation {
    chain: ChainKind,
}

impl ConditionNegation {
    pub const fn new(chain: ChainKind) -> Self {
        Self { chain }
    }
}

impl Mutator for ConditionNegation {
    fn name(&self) -> &'static str {
        match self.chain {
            ChainKind::And => "LogicalAndNegation",
            ChainKind::Or => "LogicalOrNegation",
        }
    }

    fn definition(&self) -> Definition {
        let (description, diff) = match self.chain {
            ChainKind::And => (
                "Negates whole AND (`&&`) condition.",
                "- $a = $b && $c;\n+ $a = !($b && $c);",
            ),
            ChainKind::Or => (
                "Negates whole OR (`||`) condition.",
                "- $a = $b || $c;\n+ $a = !($b || $c);",
            ),
        };

        Definition {
            description,
            category: MutatorCategory::OrthogonalReplacement,
            remedies: None,
            diff,
        }
    }

    fn can_mutate(&self, node: &Node, parents: &ParentMap) -> bool {
        if !self.chain.matches(node) {
            return false;
        }

        match parents.find_parent(node) {
            Some(parent) => !self.chain.matches(parent) && !parent.is_negation(),
            None => true,
        }
    }

    fn mutate(&self, node: &Rc<Node>) -> Mutations {
        Box::new(iter::once(Node::negation(Rc::clone(node))))
    }
}
