//! Deep copy out of the shared cache
//!
//! A cached shape may appear under many cached parents. Writing keys into it
//! would leak into every one of them, so the selected witness is rebuilt as a
//! fresh `Box` graph before any slot is filled.

use super::TreeNode;
use crate::shape::{ShapeNode, Witness};

/// Rebuild `witness` with exclusively owned nodes and empty key slots
///
/// The sentinel (`None`) detangles to `None`.
pub fn detangle<T>(witness: &Witness) -> Option<Box<TreeNode<T>>> {
    witness.as_deref().map(detangle_node)
}

fn detangle_node<T>(shape: &ShapeNode) -> Box<TreeNode<T>> {
    Box::new(TreeNode {
        color: shape.color(),
        black_height: shape.black_height(),
        node_count: shape.node_count(),
        value: None,
        left: detangle(shape.left()),
        right: detangle(shape.right()),
    })
}
