//! Owned output tree
//!
//! Everything here lives outside the shape cache: nodes are produced by
//! [`detangle`], filled by [`assign`] and then handed to the caller.

mod detangle;
mod node;
mod traversal;

pub use detangle::detangle;
pub use node::TreeNode;
pub use traversal::{assign, InOrder};

use std::fmt;

use crate::shape::{validate_root, ShapeError};

/// Red-black tree built at a chosen black-height
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tree<T> {
    root: Option<Box<TreeNode<T>>>,
    black_height: usize,
}

impl<T> Tree<T> {
    /// Wrap a root; an empty tree has black-height 1
    pub fn new(root: Option<Box<TreeNode<T>>>) -> Self {
        let black_height = root.as_ref().map_or(1, |node| node.black_height());
        Self { root, black_height }
    }

    /// Root node, `None` for the empty tree
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Achieved black-height
    pub fn black_height(&self) -> usize {
        self.black_height
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.node_count())
    }

    /// True for the sentinel-only tree
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Keys in in-order (ascending) sequence
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Recheck every red-black invariant from scratch
    pub fn validate(&self) -> Result<usize, ShapeError> {
        validate_root(self.root())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            None => writeln!(f, "(empty)"),
            Some(root) => {
                write_label(f, root)?;
                write_children(f, root, "")
            }
        }
    }
}

fn write_label<T: fmt::Display>(f: &mut fmt::Formatter<'_>, node: &TreeNode<T>) -> fmt::Result {
    match node.value() {
        Some(value) => writeln!(f, "{} {}", value, node.color()),
        None => writeln!(f, "_ {}", node.color()),
    }
}

fn write_children<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &TreeNode<T>,
    prefix: &str,
) -> fmt::Result {
    let children: Vec<(&str, &TreeNode<T>)> = [("L", node.left()), ("R", node.right())]
        .into_iter()
        .filter_map(|(side, child)| child.map(|c| (side, c)))
        .collect();

    for (idx, (side, child)) in children.iter().enumerate() {
        let last = idx + 1 == children.len();
        let (branch, extend) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        write!(f, "{prefix}{branch}{side}: ")?;
        write_label(f, child)?;
        write_children(f, child, &format!("{prefix}{extend}"))?;
    }

    Ok(())
}
