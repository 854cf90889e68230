use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Comparison operators that may appear as chain operands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompareOp {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }
}

/// Syntactic construct held by a [`Node`].
///
/// Children are shared through `Rc`, so a rebuilt tree can point at the very
/// same subtrees as the tree it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum NodeKind {
    /// Root of a parsed file.
    File { stmts: Vec<Rc<Node>> },

    /// Expression used as a statement (`$a = $b && $c;`).
    Expression { expr: Rc<Node> },

    Return {
        #[serde(default)]
        expr: Option<Rc<Node>>,
    },

    If {
        cond: Rc<Node>,
        #[serde(default)]
        stmts: Vec<Rc<Node>>,
        #[serde(default)]
        elseifs: Vec<Rc<Node>>,
        #[serde(default, rename = "else")]
        else_branch: Option<Rc<Node>>,
    },

    ElseIf {
        cond: Rc<Node>,
        #[serde(default)]
        stmts: Vec<Rc<Node>>,
    },

    Else {
        #[serde(default)]
        stmts: Vec<Rc<Node>>,
    },

    Variable { name: String },

    /// Named constant such as `true`, `false` or `PHP_EOL`.
    Constant { name: String },

    Number { value: i64 },

    Call {
        name: String,
        #[serde(default)]
        args: Vec<Rc<Node>>,
    },

    Compare {
        op: CompareOp,
        left: Rc<Node>,
        right: Rc<Node>,
    },

    BooleanAnd { left: Rc<Node>, right: Rc<Node> },

    BooleanOr { left: Rc<Node>, right: Rc<Node> },

    BooleanNot { expr: Rc<Node> },

    Assign { var: Rc<Node>, expr: Rc<Node> },
}

/// One node of a parsed syntax tree.
///
/// Nodes are immutable once built and carry no link to their parent; see
/// [`crate::parent::ParentMap`] for upward lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, span: None }
    }

    pub fn with_span(kind: NodeKind, span: Option<Span>) -> Self {
        Self { kind, span }
    }

    /// Wrap `expr` in a fresh boolean negation without position metadata.
    pub fn negation(expr: Rc<Node>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::BooleanNot { expr }))
    }

    /// Stable lowercase name of the node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::File { .. } => "file",
            NodeKind::Expression { .. } => "expression statement",
            NodeKind::Return { .. } => "return",
            NodeKind::If { .. } => "if",
            NodeKind::ElseIf { .. } => "elseif",
            NodeKind::Else { .. } => "else",
            NodeKind::Variable { .. } => "variable",
            NodeKind::Constant { .. } => "constant",
            NodeKind::Number { .. } => "number",
            NodeKind::Call { .. } => "call",
            NodeKind::Compare { .. } => "comparison",
            NodeKind::BooleanAnd { .. } => "boolean and",
            NodeKind::BooleanOr { .. } => "boolean or",
            NodeKind::BooleanNot { .. } => "boolean not",
            NodeKind::Assign { .. } => "assignment",
        }
    }

    /// True for nodes that produce a value.
    pub fn is_expression(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Variable { .. }
                | NodeKind::Constant { .. }
                | NodeKind::Number { .. }
                | NodeKind::Call { .. }
                | NodeKind::Compare { .. }
                | NodeKind::BooleanAnd { .. }
                | NodeKind::BooleanOr { .. }
                | NodeKind::BooleanNot { .. }
                | NodeKind::Assign { .. }
        )
    }

    pub fn is_negation(&self) -> bool {
        matches!(self.kind, NodeKind::BooleanNot { .. })
    }

    /// True for `true`/`false` constants, matched case-insensitively.
    pub fn is_boolean_literal(&self) -> bool {
        match &self.kind {
            NodeKind::Constant { name } => {
                name.eq_ignore_ascii_case("true") || name.eq_ignore_ascii_case("false")
            }
            _ => false,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&Rc<Node>> {
        match &self.kind {
            NodeKind::File { stmts } | NodeKind::Else { stmts } => stmts.iter().collect(),
            NodeKind::Expression { expr } | NodeKind::BooleanNot { expr } => vec![expr],
            NodeKind::Return { expr } => expr.iter().collect(),
            NodeKind::If {
                cond,
                stmts,
                elseifs,
                else_branch,
            } => std::iter::once(cond)
                .chain(stmts)
                .chain(elseifs)
                .chain(else_branch)
                .collect(),
            NodeKind::ElseIf { cond, stmts } => std::iter::once(cond).chain(stmts).collect(),
            NodeKind::Variable { .. } | NodeKind::Constant { .. } | NodeKind::Number { .. } => {
                Vec::new()
            }
            NodeKind::Call { args, .. } => args.iter().collect(),
            NodeKind::Compare { left, right, .. }
            | NodeKind::BooleanAnd { left, right }
            | NodeKind::BooleanOr { left, right } => vec![left, right],
            NodeKind::Assign { var, expr } => vec![var, expr],
        }
    }

    /// Rebuild this node with every child passed through `f`.
    ///
    /// Kind and span are kept; children are visited in the same order as
    /// [`Node::children`].
    pub fn map_children(&self, mut f: impl FnMut(&Rc<Node>) -> Rc<Node>) -> Node {
        let kind = match &self.kind {
            NodeKind::File { stmts } => NodeKind::File {
                stmts: stmts.iter().map(&mut f).collect(),
            },
            NodeKind::Else { stmts } => NodeKind::Else {
                stmts: stmts.iter().map(&mut f).collect(),
            },
            NodeKind::Expression { expr } => NodeKind::Expression { expr: f(expr) },
            NodeKind::BooleanNot { expr } => NodeKind::BooleanNot { expr: f(expr) },
            NodeKind::Return { expr } => NodeKind::Return {
                expr: expr.as_ref().map(&mut f),
            },
            NodeKind::If {
                cond,
                stmts,
                elseifs,
                else_branch,
            } => {
                let cond = f(cond);
                let stmts = stmts.iter().map(&mut f).collect();
                let elseifs = elseifs.iter().map(&mut f).collect();
                let else_branch = else_branch.as_ref().map(&mut f);
                NodeKind::If {
                    cond,
                    stmts,
                    elseifs,
                    else_branch,
                }
            }
            NodeKind::ElseIf { cond, stmts } => {
                let cond = f(cond);
                let stmts = stmts.iter().map(&mut f).collect();
                NodeKind::ElseIf { cond, stmts }
            }
            NodeKind::Variable { .. } | NodeKind::Constant { .. } | NodeKind::Number { .. } => {
                self.kind.clone()
            }
            NodeKind::Call { name, args } => NodeKind::Call {
                name: name.clone(),
                args: args.iter().map(&mut f).collect(),
            },
            NodeKind::Compare { op, left, right } => {
                let left = f(left);
                let right = f(right);
                NodeKind::Compare {
                    op: *op,
                    left,
                    right,
                }
            }
            NodeKind::BooleanAnd { left, right } => {
                let left = f(left);
                NodeKind::BooleanAnd {
                    left,
                    right: f(right),
                }
            }
            NodeKind::BooleanOr { left, right } => {
                let left = f(left);
                NodeKind::BooleanOr {
                    left,
                    right: f(right),
                }
            }
            NodeKind::Assign { var, expr } => {
                let var = f(var);
                NodeKind::Assign { var, expr: f(expr) }
            }
        };

        Node::with_span(kind, self.span)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

/// Terse constructors for building trees in unit tests.
#[cfg(test)]
pub mod build {
    use super::*;

    pub fn var(name: &str) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::Variable {
            name: name.to_string(),
        }))
    }

    pub fn constant(name: &str) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::Constant {
            name: name.to_string(),
        }))
    }

    pub fn number(value: i64) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::Number { value }))
    }

    pub fn call(name: &str, args: Vec<Rc<Node>>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::Call {
            name: name.to_string(),
            args,
        }))
    }

    pub fn compare(op: CompareOp, left: Rc<Node>, right: Rc<Node>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::Compare { op, left, right }))
    }

    pub fn and(left: Rc<Node>, right: Rc<Node>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::BooleanAnd { left, right }))
    }

    pub fn or(left: Rc<Node>, right: Rc<Node>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::BooleanOr { left, right }))
    }

    pub fn not(expr: Rc<Node>) -> Rc<Node> {
        Node::negation(expr)
    }

    pub fn assign(var: Rc<Node>, expr: Rc<Node>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::Assign { var, expr }))
    }

    pub fn expr_stmt(expr: Rc<Node>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::Expression { expr }))
    }

    pub fn ret(expr: Rc<Node>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::Return { expr: Some(expr) }))
    }

    pub fn if_stmt(cond: Rc<Node>, stmts: Vec<Rc<Node>>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::If {
            cond,
            stmts,
            elseifs: Vec::new(),
            else_branch: None,
        }))
    }

    pub fn file(stmts: Vec<Rc<Node>>) -> Rc<Node> {
        Rc::new(Node::new(NodeKind::File { stmts }))
    }

    /// Attach a span, keeping kind and children.
    pub fn spanned(node: Rc<Node>, start: u32, end: u32, line: u32) -> Rc<Node> {
        Rc::new(Node::with_span(
            node.kind.clone(),
            Some(Span { start, end, line }),
        ))
    }
}
