//! Shape cache contents: achievable heights and witness validity

use rbshape::shape::validate;
use rbshape::{Color, ShapeCache};
use test_case::test_case;
use test_helpers::*;

fn black_heights(cache: &ShapeCache, count: usize) -> Vec<usize> {
    cache.black_root(count).unwrap().heights().collect()
}

fn red_heights(cache: &ShapeCache, count: usize) -> Vec<usize> {
    cache.red_root(count).unwrap().heights().collect()
}

#[test_case(0, &[1], &[] ; "sentinel only")]
#[test_case(1, &[2], &[1] ; "single node")]
#[test_case(2, &[2], &[] ; "two nodes")]
#[test_case(3, &[2, 3], &[2] ; "three nodes")]
#[test_case(4, &[3], &[2] ; "four nodes")]
#[test_case(7, &[3, 4], &[2, 3] ; "seven nodes")]
#[test_case(15, &[3, 4, 5], &[3, 4] ; "fifteen nodes")]
#[test_case(16, &[4, 5], &[3, 4] ; "sixteen nodes")]
fn test_bucket_heights(count: usize, black: &[usize], red: &[usize]) {
    let cache = ShapeCache::build(count).expect("cache builds");
    assert_eq!(black_heights(&cache, count), black);
    assert_eq!(red_heights(&cache, count), red);
}

#[test]
fn test_matches_full_split_enumeration() {
    let max = 24;
    let cache = ShapeCache::build(max).expect("cache builds");
    let (black, red) = reference_heights(max);

    for count in 0..=max {
        assert_eq!(
            black_heights(&cache, count),
            black[count].iter().copied().collect::<Vec<_>>(),
            "black-rooted heights differ at count {count}"
        );
        assert_eq!(
            red_heights(&cache, count),
            red[count].iter().copied().collect::<Vec<_>>(),
            "red-rooted heights differ at count {count}"
        );
    }
}

#[test]
fn test_witnesses_validate_independently() {
    let max = 40;
    let cache = ShapeCache::build(max).expect("cache builds");

    for count in 0..=max {
        for color in [Color::Black, Color::Red] {
            let bucket = cache.bucket(color, count).unwrap();
            for (height, witness) in bucket.iter() {
                let node = witness.as_deref();
                assert_eq!(
                    validate(node),
                    Ok(height),
                    "{color} witness at count {count} height {height}"
                );
                assert_eq!(node.map_or(0, |n| n.node_count()), count);
            }
        }
    }
}

#[test]
fn test_black_bucket_never_empty() {
    let cache = ShapeCache::build(64).expect("cache builds");
    for count in 0..=64 {
        assert!(!cache.black_root(count).unwrap().is_empty(), "count {count}");
    }
}

#[test]
fn test_witness_count_bounded() {
    // At most one witness per (count, color, height)
    let cache = ShapeCache::build(100).expect("cache builds");
    let per_count: usize = (0..=100)
        .map(|c| cache.black_root(c).unwrap().len() + cache.red_root(c).unwrap().len())
        .sum();
    assert_eq!(cache.witness_count(), per_count);
    assert!(cache.witness_count() <= 101 * 2 * 8);
}
