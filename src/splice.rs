use std::rc::Rc;

use crate::node::Node;

/// Rebuild `root` with the node `target` (matched by identity) replaced.
///
/// Only the nodes on the path from `root` to `target` are rebuilt; every
/// other subtree is shared with the original. Returns `None` when `target`
/// is not part of the tree.
pub fn splice(root: &Rc<Node>, target: &Node, replacement: &Rc<Node>) -> Option<Rc<Node>> {
    if std::ptr::eq(root.as_ref(), target) {
        return Some(Rc::clone(replacement));
    }

    let mut replaced = false;
    let rebuilt = root.map_children(|child| {
        if replaced {
            return Rc::clone(child);
        }
        match splice(child, target, replacement) {
            Some(node) => {
                replaced = true;
                node
            }
            None => Rc::clone(child),
        }
    });

    replaced.then(|| Rc::new(rebuilt))
}
