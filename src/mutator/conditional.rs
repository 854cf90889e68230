use std::iter;
use std::rc::Rc;

use super::{Definition, MutatorCategory, Mutations, Mutator};
use crate::node::{Node, NodeKind};
use crate::parent::ParentMap;

/// Replaces an `if` condition with `false`, keeping every branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct IfAlwaysFalse;

impl Mutator for IfAlwaysFalse {
    fn name(&self) -> &'static str {
        "IfAlwaysFalse"
    }

    fn definition(&self) -> Definition {
        Definition {
            description: "Changes if condition to false",
            category: MutatorCategory::OrthogonalReplacement,
            remedies: None,
            diff: "- if ($this->foo()) {\n+ if (false) {\n  }",
        }
    }

    fn can_mutate(&self, node: &Node, _parents: &ParentMap) -> bool {
        match &node.kind {
            NodeKind::If { cond, .. } => !cond.is_boolean_literal(),
            _ => false,
        }
    }

    fn mutate(&self, node: &Rc<Node>) -> Mutations {
        let NodeKind::If {
            stmts,
            elseifs,
            else_branch,
            ..
        } = &node.kind
        else {
            return Box::new(iter::empty());
        };

        let replacement = Node::with_span(
            NodeKind::If {
                cond: Rc::new(Node::new(NodeKind::Constant {
                    name: "false".to_string(),
                })),
                stmts: stmts.clone(),
                elseifs: elseifs.clone(),
                else_branch: else_branch.clone(),
            },
            node.span,
        );

        Box::new(iter::once(Rc::new(replacement)))
    }
}
