//! Height-keyed witness bucket

use std::collections::BTreeMap;

use crate::shape::{witness_black_height, Witness};

/// One witness per distinct achievable black-height
///
/// The first witness offered for a height wins; later ones are dropped.
#[derive(Debug, Clone, Default)]
pub struct HeightBucket {
    witnesses: BTreeMap<usize, Witness>,
}

impl HeightBucket {
    /// Create an empty bucket
    pub fn new() -> Self {
        Self {
            witnesses: BTreeMap::new(),
        }
    }

    /// Bucket holding only the sentinel at height 1
    pub fn sentinel() -> Self {
        let mut bucket = Self::new();
        bucket.offer(None);
        bucket
    }

    /// Insert `witness` unless its height is already represented
    ///
    /// Returns whether the witness was kept.
    pub fn offer(&mut self, witness: Witness) -> bool {
        let height = witness_black_height(&witness);
        if self.witnesses.contains_key(&height) {
            return false;
        }
        self.witnesses.insert(height, witness);
        true
    }

    /// Witness for `height`, if that height is achievable
    pub fn get(&self, height: usize) -> Option<&Witness> {
        self.witnesses.get(&height)
    }

    /// Whether `height` is achievable
    pub fn contains(&self, height: usize) -> bool {
        self.witnesses.contains_key(&height)
    }

    /// Achievable heights, ascending
    pub fn heights(&self) -> impl Iterator<Item = usize> + '_ {
        self.witnesses.keys().copied()
    }

    /// `(height, witness)` pairs, ascending by height
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Witness)> {
        self.witnesses.iter().map(|(&height, witness)| (height, witness))
    }

    /// Number of distinct heights
    pub fn len(&self) -> usize {
        self.witnesses.len()
    }

    /// True when no height is achievable
    pub fn is_empty(&self) -> bool {
        self.witnesses.is_empty()
    }
}
