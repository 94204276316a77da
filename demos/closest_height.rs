//! Request every black-height from 1 to 6 for the same keys and show what
//! each request actually gets.

use rbshape::{BuildConfig, TreeBuilder};

fn main() -> anyhow::Result<()> {
    let keys = [42, 7, 19, 3, 88, 61, 25, 14, 70, 5, 33, 50, 96, 11, 77];

    // One builder, so the shape cache is computed once
    let mut builder = TreeBuilder::new(BuildConfig::default());

    for target in 1..=6 {
        let tree = builder.build(keys, target)?;
        println!(
            "target {target}: achieved {} ({} keys)",
            tree.black_height(),
            tree.len()
        );
    }

    let tree = builder.build(keys, 5)?;
    print!("{tree}");

    Ok(())
}
