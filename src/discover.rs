use std::rc::Rc;

use crate::mutant::{Mutant, MutationOperator};
use crate::mutator::Mutator;
use crate::mutator::registry::MutatorRegistry;
use crate::node::Node;
use crate::parent::SyntaxTree;
use crate::splice::splice;

/// A mutant together with the nodes it was built from.
#[derive(Debug, Clone)]
pub struct Discovered {
    pub mutant: Mutant,

    /// Node of the original tree the rule fired on.
    pub target: Rc<Node>,

    /// Node that replaces `target` in the mutated tree.
    pub replacement: Rc<Node>,
}

impl Discovered {
    /// The whole tree with `target` swapped for `replacement`.
    pub fn mutated_tree(&self, tree: &SyntaxTree) -> Option<Rc<Node>> {
        splice(tree.root(), &self.target, &self.replacement)
    }
}

/// Lazily discover mutants in `tree`.
///
/// Nodes are visited in pre-order and, per node, rules in registry order.
/// Ids are 1-based and follow generation order, so taking the first N
/// mutants is deterministic and never builds the ones after them.
pub fn discover_mutants<'a>(
    tree: &'a SyntaxTree,
    registry: &'a MutatorRegistry,
) -> impl Iterator<Item = Discovered> + 'a {
    tree.nodes()
        .iter()
        .flat_map(move |node| {
            registry
                .iter()
                .filter(move |mutator| mutator.can_mutate(node, tree.parents()))
                .flat_map(move |mutator| {
                    mutator
                        .mutate(node)
                        .map(move |replacement| (mutator, node, replacement))
                })
        })
        .enumerate()
        .map(|(idx, (mutator, node, replacement))| build(idx as u64 + 1, mutator, node, replacement))
}

fn build(id: u64, mutator: &dyn Mutator, target: &Rc<Node>, replacement: Rc<Node>) -> Discovered {
    let mutant = Mutant {
        id,
        operator: MutationOperator::of(mutator),
        span: target.span,
        original_snippet: target.to_string(),
        mutated_snippet: replacement.to_string(),
    };

    Discovered {
        mutant,
        target: Rc::clone(target),
        replacement,
    }
}
