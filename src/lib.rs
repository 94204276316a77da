//! # Red-black trees at a requested black-height
//!
//! Given N keys and a target black-height, build a valid red-black tree whose
//! black-height is as close to the target as any N-node tree allows, with the
//! keys in sorted in-order position.
//!
//! ## Core Algorithm
//!
//! 1. **Shape cache**: for every count `0..=N` and each root color, record one
//!    witness shape per achievable black-height, composed from smaller counts
//! 2. **Closest height**: pick the black-rooted witness for N nearest the target
//! 3. **Detangle**: deep-copy the witness out of the shared cache
//! 4. **Assign**: write the sorted keys into the copy in in-order position
//!
//! The cache never enumerates all shapes; one witness per height keeps it at
//! `O(N × max height)` nodes.
//!
//! ## Usage Example
//!
//! ```
//! let tree = rbshape::build(vec![5, 1, 3], 2)?;
//! assert_eq!(tree.black_height(), 2);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
//! # Ok::<(), rbshape::BuildError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod cache; // Memoized witness table and closest-height lookup
pub mod shape; // Immutable shared shapes and validation
pub mod tree; // Owned output tree, detangling and key assignment

// Re-exports for convenience
pub use cache::{closest_black_root_witness, HeightBucket, Selection, ShapeCache, TieBreak};
pub use shape::{Color, ShapeError, ShapeNode, ShapeView, Witness};
pub use tree::{Tree, TreeNode};

use thiserror::Error;
use tracing::debug;

/// Build options
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Rule for equally distant black-heights
    pub tie_break: TieBreak,

    /// Largest key count accepted; `None` means unbounded
    pub node_limit: Option<usize>,
}

impl BuildConfig {
    /// Set the tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Cap the number of keys a build may take
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }
}

/// Errors that can occur while building a tree
#[derive(Error, Debug)]
pub enum BuildError {
    /// A shape combination broke a red-black invariant
    #[error("Invalid shape: {0}")]
    InvalidShape(#[from] ShapeError),

    /// Rejected input (non-positive target, mismatched key count)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No black-rooted shape was found for the key count
    #[error("No black-rooted shape for {count} nodes")]
    EmptyResult {
        /// Requested node count
        count: usize,
    },

    /// Key count is above the configured limit
    #[error("Node count {count} exceeds limit {limit}")]
    NodeLimitExceeded {
        /// Requested node count
        count: usize,
        /// Configured limit
        limit: usize,
    },
}

/// Tree builder that keeps its shape cache between builds
#[derive(Debug)]
pub struct TreeBuilder {
    config: BuildConfig,
    cache: ShapeCache,
}

impl TreeBuilder {
    /// Create a builder with an empty cache
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            cache: ShapeCache::new(),
        }
    }

    /// Build options in use
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Shape cache as populated by previous builds
    pub fn cache(&self) -> &ShapeCache {
        &self.cache
    }

    /// Build a tree over `elements` with black-height nearest `target_black_height`
    ///
    /// Keys are sorted (stably, duplicates kept) before placement. The returned
    /// tree's [`Tree::black_height`] may differ from the target when no
    /// `len(elements)`-node tree reaches it.
    pub fn build<T, I>(&mut self, elements: I, target_black_height: usize) -> Result<Tree<T>, BuildError>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        if target_black_height == 0 {
            return Err(BuildError::InvalidInput(
                "target black height must be positive".to_string(),
            ));
        }

        let mut elements: Vec<T> = elements.into_iter().collect();
        let count = elements.len();
        if let Some(limit) = self.config.node_limit {
            if count > limit {
                return Err(BuildError::NodeLimitExceeded { count, limit });
            }
        }

        debug!(count, target = target_black_height, "building tree");

        elements.sort();
        self.cache.ensure(count)?;

        let selection = closest_black_root_witness(
            &self.cache,
            count,
            target_black_height,
            self.config.tie_break,
        )
        .ok_or(BuildError::EmptyResult { count })?;

        let Some(mut root) = tree::detangle::<T>(selection.witness) else {
            debug!(achieved = selection.black_height, "built empty tree");
            return Ok(Tree::new(None));
        };

        if root.node_count() != count {
            return Err(BuildError::InvalidInput(format!(
                "selected shape has {} nodes for {} keys",
                root.node_count(),
                count
            )));
        }

        let mut slots: Vec<Option<T>> = elements.into_iter().map(Some).collect();
        tree::assign(&mut *root, &mut slots);

        debug!(
            count,
            target = target_black_height,
            achieved = selection.black_height,
            "built tree"
        );

        Ok(Tree::new(Some(root)))
    }
}

/// Build a tree with default options and a fresh cache
pub fn build<T, I>(elements: I, target_black_height: usize) -> Result<Tree<T>, BuildError>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    TreeBuilder::new(BuildConfig::default()).build(elements, target_black_height)
}
