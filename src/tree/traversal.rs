//! In-order traversal: key assignment and iteration
//!
//! Node `n` sits at in-order position `from + count(n.left)`, so sorted keys
//! can be placed without walking the left subtree first.

use super::TreeNode;

/// Write `values` into the key slots of `node` in in-order position
///
/// Each slot of `values` is taken exactly once. Requires
/// `values.len() == node.node_count()`; the caller checks this.
pub fn assign<T>(node: &mut TreeNode<T>, values: &mut [Option<T>]) {
    debug_assert_eq!(values.len(), node.node_count);

    let mid = node.left.as_ref().map_or(0, |left| left.node_count);
    let (lower, rest) = values.split_at_mut(mid);
    let (slot, upper) = rest.split_at_mut(1);

    node.value = slot[0].take();
    if let Some(left) = node.left.as_deref_mut() {
        assign(left, lower);
    }
    if let Some(right) = node.right.as_deref_mut() {
        assign(right, upper);
    }
}

/// In-order iterator over assigned keys
///
/// Stack depth is bounded by tree height.
#[derive(Debug)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: root.map_or(0, |node| node.node_count),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let node = self.stack.pop()?;
            self.push_left_spine(node.right());
            self.remaining -= 1;
            // Unfilled slots are skipped
            if let Some(value) = node.value() {
                return Some(value);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
