//! Shape node with construction-time invariants
//!
//! Children are `Rc`-shared: one cached shape may sit under many cached
//! parents at once. Nothing reachable from a `ShapeNode` is ever mutated.

use std::rc::Rc;

use super::{Color, ShapeError};

/// Optional shared subtree; `None` is the black sentinel leaf
pub type Witness = Option<Rc<ShapeNode>>;

/// One node of a tree shape
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeNode {
    color: Color,
    black_height: usize,
    node_count: usize,
    left: Witness,
    right: Witness,
}

impl ShapeNode {
    /// Build a node over two existing subtrees
    ///
    /// Fails with [`ShapeError::RedChildOfRed`] or
    /// [`ShapeError::HeightMismatch`] instead of producing an invalid node.
    pub fn new(color: Color, left: Witness, right: Witness) -> Result<Self, ShapeError> {
        if color == Color::Red
            && (witness_color(&left) == Color::Red || witness_color(&right) == Color::Red)
        {
            return Err(ShapeError::RedChildOfRed);
        }

        let left_height = witness_black_height(&left);
        let right_height = witness_black_height(&right);
        if left_height != right_height {
            return Err(ShapeError::HeightMismatch {
                left: left_height,
                right: right_height,
            });
        }

        Ok(Self {
            color,
            black_height: left_height + color.height_contribution(),
            node_count: witness_node_count(&left) + witness_node_count(&right) + 1,
            left,
            right,
        })
    }

    /// Single node over two sentinels
    pub fn leaf(color: Color) -> Self {
        Self {
            color,
            black_height: 1 + color.height_contribution(),
            node_count: 1,
            left: None,
            right: None,
        }
    }

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

    /// Left subtree
    #[inline]
    pub fn left(&self) -> &Witness {
        &self.left
    }

    /// Right subtree
    #[inline]
    pub fn right(&self) -> &Witness {
        &self.right
    }
}

/// Black-height of a possibly absent subtree
#[inline]
pub fn witness_black_height(witness: &Witness) -> usize {
    witness.as_ref().map_or(1, |node| node.black_height)
}

/// Node count of a possibly absent subtree
#[inline]
pub fn witness_node_count(witness: &Witness) -> usize {
    witness.as_ref().map_or(0, |node| node.node_count)
}

/// Color of a possibly absent subtree (sentinels are black)
#[inline]
pub fn witness_color(witness: &Witness) -> Color {
    witness.as_ref().map_or(Color::Black, |node| node.color)
}
