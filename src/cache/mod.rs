//! Memoized shape cache
//!
//! For every node count `c` the cache holds two buckets, black-rooted and
//! red-rooted, each mapping an achievable black-height to one witness shape.
//! Bucket `c` is composed only from buckets `< c`, so counts are filled in
//! ascending order and never revisited.
//!
//! Left-subtree sizes run over `0..=c/2` only. The height-matching rule is
//! symmetric in left and right, so the mirrored splits reach no new heights.

mod bucket;
mod select;

pub use bucket::HeightBucket;
pub use select::{closest_black_root_witness, Selection, TieBreak};

use std::rc::Rc;

use tracing::{debug, trace};

use crate::shape::{Color, ShapeError, ShapeNode};

/// Witness table indexed by node count and root color
#[derive(Debug, Clone)]
pub struct ShapeCache {
    /// `black_root[c]`: black-rooted shapes with `c` nodes
    black_root: Vec<HeightBucket>,

    /// `red_root[c]`: red-rooted shapes with `c` nodes
    red_root: Vec<HeightBucket>,
}

impl ShapeCache {
    /// Cache covering only count 0 (the sentinel)
    pub fn new() -> Self {
        Self {
            black_root: vec![HeightBucket::sentinel()],
            red_root: vec![HeightBucket::new()],
        }
    }

    /// Cache covering counts `0..=max_count`
    pub fn build(max_count: usize) -> Result<Self, ShapeError> {
        let mut cache = Self::new();
        cache.ensure(max_count)?;
        Ok(cache)
    }

    /// Extend the cache so it covers `0..=max_count`
    ///
    /// Counts already present are left untouched.
    pub fn ensure(&mut self, max_count: usize) -> Result<(), ShapeError> {
        let start = self.black_root.len();
        if max_count < start {
            return Ok(());
        }

        debug!(from = start, to = max_count, "extending shape cache");

        for count in start..=max_count {
            let black = self.populate(Color::Black, count)?;
            let red = self.populate(Color::Red, count)?;
            trace!(
                count,
                black = black.len(),
                red = red.len(),
                "populated buckets"
            );
            self.black_root.push(black);
            self.red_root.push(red);
        }

        Ok(())
    }

    /// Largest node count covered
    pub fn max_count(&self) -> usize {
        self.black_root.len() - 1
    }

    /// Black-rooted bucket for `count`
    pub fn black_root(&self, count: usize) -> Option<&HeightBucket> {
        self.black_root.get(count)
    }

    /// Red-rooted bucket for `count`
    pub fn red_root(&self, count: usize) -> Option<&HeightBucket> {
        self.red_root.get(count)
    }

    /// Bucket for `count` by root color
    pub fn bucket(&self, color: Color, count: usize) -> Option<&HeightBucket> {
        match color {
            Color::Black => self.black_root(count),
            Color::Red => self.red_root(count),
        }
    }

    /// Total witnesses held across all buckets
    pub fn witness_count(&self) -> usize {
        self.black_root
            .iter()
            .chain(self.red_root.iter())
            .map(HeightBucket::len)
            .sum()
    }

    /// Buckets a child of a `parent`-colored node with `size` nodes may come from
    fn child_sources(&self, parent: Color, size: usize) -> Vec<&HeightBucket> {
        match parent {
            Color::Black => vec![&self.black_root[size], &self.red_root[size]],
            Color::Red => vec![&self.black_root[size]],
        }
    }

    fn populate(&self, color: Color, count: usize) -> Result<HeightBucket, ShapeError> {
        debug_assert!(count >= 1 && count == self.black_root.len());

        let mut bucket = HeightBucket::new();
        let remaining = count - 1;

        for left_size in 0..=count / 2 {
            let right_size = remaining - left_size;
            let left_sources = self.child_sources(color, left_size);
            let right_sources = self.child_sources(color, right_size);

            for left_bucket in &left_sources {
                for (height, left) in left_bucket.iter() {
                    for right_bucket in &right_sources {
                        let Some(right) = right_bucket.get(height) else {
                            continue;
                        };
                        let node = ShapeNode::new(color, left.clone(), right.clone())?;
                        bucket.offer(Some(Rc::new(node)));
                    }
                }
            }
        }

        Ok(bucket)
    }
}

impl Default for ShapeCache {
    fn default() -> Self {
        Self::new()
    }
}
