//! Closest black-height lookup

use super::{HeightBucket, ShapeCache};
use crate::shape::Witness;

/// Which height wins when two are equally far from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Take the smaller black-height
    #[default]
    PreferSmaller,

    /// Take the larger black-height
    PreferLarger,
}

/// Witness picked for a requested black-height
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// Black-height of the chosen witness
    pub black_height: usize,

    /// The chosen witness, still owned by the cache
    pub witness: &'a Witness,
}

/// Black-rooted witness with `count` nodes whose height is nearest `target`
///
/// Returns `None` only when `count` is outside the cache or its black bucket
/// is empty, neither of which happens for a cache built up to `count`.
pub fn closest_black_root_witness(
    cache: &ShapeCache,
    count: usize,
    target: usize,
    tie_break: TieBreak,
) -> Option<Selection<'_>> {
    closest_in_bucket(cache.black_root(count)?, target, tie_break)
}

fn closest_in_bucket(
    bucket: &HeightBucket,
    target: usize,
    tie_break: TieBreak,
) -> Option<Selection<'_>> {
    let mut best: Option<Selection<'_>> = None;
    for (black_height, witness) in bucket.iter() {
        let candidate = Selection {
            black_height,
            witness,
        };
        best = match best {
            None => Some(candidate),
            Some(current) => {
                let distance = black_height.abs_diff(target);
                let current_distance = current.black_height.abs_diff(target);
                // Heights arrive ascending, so an equal distance is a larger height
                if distance < current_distance
                    || (distance == current_distance && tie_break == TieBreak::PreferLarger)
                {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Color, ShapeNode};
    use std::rc::Rc;

    fn pick(cache: &ShapeCache, count: usize, target: usize, tie_break: TieBreak) -> usize {
        closest_black_root_witness(cache, count, target, tie_break)
            .unwrap()
            .black_height
    }

    #[test]
    fn test_exact_match() {
        let cache = ShapeCache::build(7).unwrap();
        assert_eq!(pick(&cache, 3, 2, TieBreak::PreferSmaller), 2);
        assert_eq!(pick(&cache, 3, 3, TieBreak::PreferSmaller), 3);
        assert_eq!(pick(&cache, 7, 4, TieBreak::PreferSmaller), 4);
    }

    #[test]
    fn test_out_of_range_targets_clamp() {
        let cache = ShapeCache::build(7).unwrap();
        assert_eq!(pick(&cache, 7, 1, TieBreak::PreferSmaller), 3);
        assert_eq!(pick(&cache, 7, 40, TieBreak::PreferSmaller), 4);
        assert_eq!(pick(&cache, 0, 5, TieBreak::PreferSmaller), 1);
    }

    #[test]
    fn test_tie_break() {
        // Heights 2 and 4 with nothing in between
        let black = || Some(Rc::new(ShapeNode::leaf(Color::Black)));
        let three = || {
            Some(Rc::new(
                ShapeNode::new(Color::Black, black(), black()).unwrap(),
            ))
        };
        let four = ShapeNode::new(Color::Black, three(), three()).unwrap();

        let mut bucket = HeightBucket::new();
        bucket.offer(black());
        bucket.offer(Some(Rc::new(four)));

        let smaller = closest_in_bucket(&bucket, 3, TieBreak::PreferSmaller).unwrap();
        let larger = closest_in_bucket(&bucket, 3, TieBreak::PreferLarger).unwrap();
        assert_eq!(smaller.black_height, 2);
        assert_eq!(larger.black_height, 4);

        // Ties only matter at equal distance
        let near = closest_in_bucket(&bucket, 4, TieBreak::PreferSmaller).unwrap();
        assert_eq!(near.black_height, 4);
    }

    #[test]
    fn test_empty_bucket() {
        assert!(closest_in_bucket(&HeightBucket::new(), 2, TieBreak::PreferSmaller).is_none());
    }

    #[test]
    fn test_missing_count() {
        let cache = ShapeCache::build(2).unwrap();
        assert!(closest_black_root_witness(&cache, 3, 2, TieBreak::PreferSmaller).is_none());
    }
}
