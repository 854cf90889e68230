//! Mutation rules and the contract they share.

pub mod boolean;
pub mod chain;
pub mod conditional;
pub mod registry;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::node::Node;
use crate::parent::ParentMap;

/// How a mutant relates to the behaviour of the original code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MutatorCategory {
    /// Takes an alternate branch; neither weaker nor stronger than the original.
    OrthogonalReplacement,

    /// Removes behaviour (for example deleting a statement).
    SemanticReduction,

    /// Adds behaviour (for example an extra condition).
    SemanticAddition,
}

/// Static, human-oriented description of a rule, consumed by reporting.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Definition {
    pub description: &'static str,

    pub category: MutatorCategory,

    /// Advice on how to kill mutants of this kind, when there is any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remedies: Option<&'static str>,

    /// Illustrative before/after snippet.
    pub diff: &'static str,
}

/// Replacement nodes produced by a rule, built one at a time on demand.
pub type Mutations = Box<dyn Iterator<Item = Rc<Node>>>;

/// A single mutation rule.
pub trait Mutator {
    /// Stable identifier used on the command line and in reports.
    fn name(&self) -> &'static str;

    fn definition(&self) -> Definition;

    /// Whether `mutate` may be called on `node`. Never fails; unknown node
    /// kinds are simply not mutable.
    fn can_mutate(&self, node: &Node, parents: &ParentMap) -> bool;

    /// Produce replacements for `node`.
    ///
    /// Only valid when [`Mutator::can_mutate`] returned true for `node`. The
    /// input tree is never modified.
    fn mutate(&self, node: &Rc<Node>) -> Mutations;
}
