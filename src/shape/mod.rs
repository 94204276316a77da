//! Immutable red-black tree shapes
//!
//! A shape is structure plus coloring, with no keys. Shapes are built
//! bottom-up and shared by reference between cached parents, so every
//! derived attribute is fixed at construction.
//!
//! Black-height convention: an absent child is a black sentinel of height 1.

mod node;
mod validate;

pub use node::{witness_black_height, witness_color, witness_node_count, ShapeNode, Witness};
pub use validate::{validate, validate_root, ShapeView};

use std::fmt;

use thiserror::Error;

/// Node color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Color {
    /// Red node (contributes nothing to black-height)
    Red,

    /// Black node (adds one to black-height)
    Black,
}

impl Color {
    /// Black-height contributed by a node of this color
    #[inline]
    pub fn height_contribution(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Red-black invariant violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A red node was given a red child
    #[error("red node cannot have a red child")]
    RedChildOfRed,

    /// Left and right subtrees disagree on black-height
    #[error("child black heights differ: left {left}, right {right}")]
    HeightMismatch {
        /// Black-height of the left subtree
        left: usize,
        /// Black-height of the right subtree
        right: usize,
    },

    /// Root of a complete tree must be black
    #[error("root node must be black")]
    RedRoot,

    /// Stored black-height disagrees with a recomputation
    #[error("recorded black height {recorded} but subtree has {actual}")]
    StaleBlackHeight {
        /// Value stored on the node
        recorded: usize,
        /// Value recomputed from the children
        actual: usize,
    },

    /// Stored node count disagrees with a recomputation
    #[error("recorded node count {recorded} but subtree has {actual}")]
    StaleNodeCount {
        /// Value stored on the node
        recorded: usize,
        /// Value recomputed from the children
        actual: usize,
    },
}
