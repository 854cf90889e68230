use serde::{Deserialize, Serialize};

use crate::mutator::{Mutator, MutatorCategory};
use crate::span::Span;

/// Identifier for the rule that produced a mutant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationOperator {
    /// Category this rule belongs to.
    pub category: MutatorCategory,

    /// Stable rule name (for example `LogicalAndNegation`).
    pub name: String,
}

impl MutationOperator {
    pub fn of(mutator: &dyn Mutator) -> Self {
        Self {
            category: mutator.definition().category,
            name: mutator.name().to_string(),
        }
    }
}

/// A single first-order mutant, described at the source level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mutant {
    /// 1-based identifier in generation order.
    pub id: u64,

    /// Rule applied to create this mutant.
    pub operator: MutationOperator,

    /// Location of the mutated node, when the parser recorded one.
    pub span: Option<Span>,

    /// Original node, rendered as source.
    pub original_snippet: String,

    /// Replacement node, rendered as source.
    pub mutated_snippet: String,
}
