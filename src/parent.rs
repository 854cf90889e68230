use std::collections::HashMap;
use std::rc::Rc;

use crate::node::Node;

/// Side table mapping each node of a tree to its structural parent.
///
/// Nodes are keyed by the address of their shared allocation, so lookups are
/// by identity: two structurally equal nodes at different positions have
/// different parents.
#[derive(Debug, Default)]
pub struct ParentMap {
    parents: HashMap<*const Node, Rc<Node>>,
}

impl ParentMap {
    /// Record the parent of every node reachable from `root`.
    pub fn build(root: &Rc<Node>) -> Self {
        let mut parents = HashMap::new();
        let mut stack = vec![Rc::clone(root)];

        while let Some(node) = stack.pop() {
            for child in node.children() {
                parents.insert(Rc::as_ptr(child), Rc::clone(&node));
                stack.push(Rc::clone(child));
            }
        }

        Self { parents }
    }

    /// Parent of `node`, or `None` for the root and for nodes outside the tree.
    pub fn find_parent(&self, node: &Node) -> Option<&Node> {
        self.parents
            .get(&(node as *const Node))
            .map(|parent| parent.as_ref())
    }
}

/// A parsed tree together with the lookups rules need while it is walked.
#[derive(Debug)]
pub struct SyntaxTree {
    root: Rc<Node>,
    nodes: Vec<Rc<Node>>,
    parents: ParentMap,
}

impl SyntaxTree {
    pub fn new(root: Rc<Node>) -> Self {
        let nodes = preorder(&root);
        let parents = ParentMap::build(&root);
        Self {
            root,
            nodes,
            parents,
        }
    }

    pub fn root(&self) -> &Rc<Node> {
        &self.root
    }

    /// Every node of the tree, parents before children, siblings left to right.
    pub fn nodes(&self) -> &[Rc<Node>] {
        &self.nodes
    }

    pub fn parents(&self) -> &ParentMap {
        &self.parents
    }
}

fn preorder(root: &Rc<Node>) -> Vec<Rc<Node>> {
    let mut out = Vec::new();
    let mut stack = vec![Rc::clone(root)];

    while let Some(node) = stack.pop() {
        // Reverse so the leftmost child is popped first.
        for child in node.children().into_iter().rev() {
            stack.push(Rc::clone(child));
        }
        out.push(node);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::node::build::*;

    #[test]
    fn root_has_no_parent() {
        let root = file(vec![expr_stmt(var("a"))]);
        let parents = ParentMap::build(&root);

        assert!(parents.find_parent(&root).is_none());
    }

    #[test]
    fn nested_chain_node_points_at_outer_chain() {
        let inner = and(var("b"), var("c"));
        let outer = and(Rc::clone(&inner), var("d"));
        let root = file(vec![expr_stmt(Rc::clone(&outer))]);

        let parents = ParentMap::build(&root);

        let parent = parents.find_parent(&inner).expect("inner has a parent");
        assert!(std::ptr::eq(parent, outer.as_ref()));

        let parent = parents.find_parent(&outer).expect("outer has a parent");
        assert!(matches!(parent.kind, NodeKind::Expression { .. }));
    }

    #[test]
    fn lookup_is_by_identity_not_structure() {
        let root = and(var("b"), var("c"));
        let parents = ParentMap::build(&root);

        let detached = var("b");
        assert!(parents.find_parent(&detached).is_none());
    }

    #[test]
    fn nodes_are_listed_in_preorder() {
        let root = file(vec![
            expr_stmt(or(var("a"), var("b"))),
            ret(var("c")),
        ]);
        let tree = SyntaxTree::new(root);

        let kinds: Vec<&str> = tree.nodes().iter().map(|n| n.kind_name()).collect();
        assert_eq!(
            kinds,
            [
                "file",
                "expression statement",
                "boolean or",
                "variable",
                "variable",
                "return",
                "variable",
            ]
        );
    }
}
