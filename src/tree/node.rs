//! Exclusively owned output node
//!
//! Mirrors a cached [`ShapeNode`](crate::shape::ShapeNode) but owns its
//! children through `Box`, so its key slot can be written in place.

use crate::shape::{Color, ShapeView};

/// Output tree node carrying a key slot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeNode<T> {
    pub(crate) color: Color,
    pub(crate) black_height: usize,
    pub(crate) node_count: usize,
    pub(crate) value: Option<T>,
    pub(crate) left: Option<Box<TreeNode<T>>>,
    pub(crate) right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Node color
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Black-height, counting the sentinel as 1
    #[inline]
    pub fn black_height(&self) -> usize {
        self.black_height
    }

    /// Number of real nodes in this subtree
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Assigned key, `None` until the slot is filled
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Left child
    #[inline]
    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    /// Right child
    #[inline]
    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    /// Overwrite the key slot
    ///
    /// Color, children and derived counts stay fixed.
    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
    }
}

impl<T> ShapeView for TreeNode<T> {
    fn view_color(&self) -> Color {
        self.color
    }

    fn view_black_height(&self) -> usize {
        self.black_height
    }

    fn view_node_count(&self) -> usize {
        self.node_count
    }

    fn view_left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn view_right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
