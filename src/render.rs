use std::rc::Rc;

use crate::node::{Node, NodeKind};

const INDENT: &str = "    ";

// Binding strength, loosest first.
const PREC_ASSIGN: u8 = 1;
const PREC_OR: u8 = 2;
const PREC_AND: u8 = 3;
const PREC_COMPARE: u8 = 4;
const PREC_NOT: u8 = 5;
const PREC_ATOM: u8 = 6;

/// Print a node as PHP-flavoured source.
///
/// Parentheses are emitted only where precedence or associativity requires
/// them, so `(a && b) && c` prints as `$a && $b && $c` while `a && (b && c)`
/// keeps its parentheses.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    if node.is_expression() {
        write_expr(&mut out, node, 0);
    } else {
        write_stmt(&mut out, node, 0);
    }
    out
}

fn precedence(node: &Node) -> u8 {
    match node.kind {
        NodeKind::Assign { .. } => PREC_ASSIGN,
        NodeKind::BooleanOr { .. } => PREC_OR,
        NodeKind::BooleanAnd { .. } => PREC_AND,
        NodeKind::Compare { .. } => PREC_COMPARE,
        NodeKind::BooleanNot { .. } => PREC_NOT,
        _ => PREC_ATOM,
    }
}

fn write_expr(out: &mut String, node: &Node, min_prec: u8) {
    if !node.is_expression() {
        write_stmt(out, node, 0);
        return;
    }

    let prec = precedence(node);
    let parens = prec < min_prec;
    if parens {
        out.push('(');
    }

    match &node.kind {
        NodeKind::Variable { name } => {
            out.push('$');
            out.push_str(name);
        }
        NodeKind::Constant { name } => out.push_str(name),
        NodeKind::Number { value } => out.push_str(&value.to_string()),
        NodeKind::Call { name, args } => {
            out.push_str(name);
            out.push('(');
            for (idx, arg) in args.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_expr(out, arg, 0);
            }
            out.push(')');
        }
        NodeKind::Compare { op, left, right } => {
            write_binary(out, left, op.symbol(), right, PREC_COMPARE + 1, PREC_COMPARE + 1);
        }
        NodeKind::BooleanAnd { left, right } => {
            write_binary(out, left, "&&", right, PREC_AND, PREC_AND + 1);
        }
        NodeKind::BooleanOr { left, right } => {
            write_binary(out, left, "||", right, PREC_OR, PREC_OR + 1);
        }
        NodeKind::BooleanNot { expr } => {
            out.push('!');
            write_expr(out, expr, PREC_NOT);
        }
        NodeKind::Assign { var, expr } => {
            write_binary(out, var, "=", expr, PREC_ATOM, PREC_ASSIGN);
        }
        _ => unreachable!("statement kinds are handled above"),
    }

    if parens {
        out.push(')');
    }
}

fn write_binary(out: &mut String, left: &Node, op: &str, right: &Node, lp: u8, rp: u8) {
    write_expr(out, left, lp);
    out.push(' ');
    out.push_str(op);
    out.push(' ');
    write_expr(out, right, rp);
}

fn write_stmt(out: &mut String, node: &Node, depth: usize) {
    match &node.kind {
        NodeKind::File { stmts } => {
            for (idx, stmt) in stmts.iter().enumerate() {
                if idx > 0 {
                    out.push('\n');
                }
                write_stmt(out, stmt, depth);
            }
        }
        NodeKind::Expression { expr } => {
            write_expr(out, expr, 0);
            out.push(';');
        }
        NodeKind::Return { expr } => {
            out.push_str("return");
            if let Some(expr) = expr {
                out.push(' ');
                write_expr(out, expr, 0);
            }
            out.push(';');
        }
        NodeKind::If {
            cond,
            stmts,
            elseifs,
            else_branch,
        } => {
            write_header(out, "if", cond);
            write_block(out, stmts, depth);
            for branch in elseifs {
                out.push(' ');
                write_stmt(out, branch, depth);
            }
            if let Some(branch) = else_branch {
                out.push(' ');
                write_stmt(out, branch, depth);
            }
        }
        NodeKind::ElseIf { cond, stmts } => {
            write_header(out, "elseif", cond);
            write_block(out, stmts, depth);
        }
        NodeKind::Else { stmts } => {
            out.push_str("else");
            write_block(out, stmts, depth);
        }
        _ => {
            write_expr(out, node, 0);
            out.push(';');
        }
    }
}

fn write_header(out: &mut String, keyword: &str, cond: &Node) {
    out.push_str(keyword);
    out.push_str(" (");
    write_expr(out, cond, 0);
    out.push(')');
}

fn write_block(out: &mut String, stmts: &[Rc<Node>], depth: usize) {
    out.push_str(" {\n");
    for stmt in stmts {
        for _ in 0..=depth {
            out.push_str(INDENT);
        }
        write_stmt(out, stmt, depth + 1);
        out.push('\n');
    }
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push('}');
}
