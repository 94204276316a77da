use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rbshape::{BuildConfig, ShapeCache, TieBreak, TreeBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rbshape", about = "Build red-black trees at a requested black-height")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a tree over the given keys and print it.
    Build {
        /// Requested black-height (sentinel leaves count as 1).
        #[arg(long)]
        height: usize,
        /// Break equal-distance ties toward the larger black-height.
        #[arg(long)]
        prefer_larger: bool,
        /// Refuse inputs with more keys than this.
        #[arg(long)]
        node_limit: Option<usize>,
        /// Integer keys; read whitespace-separated from stdin when omitted.
        keys: Vec<i64>,
    },
    /// List achievable black-heights for every node count up to `max`.
    Heights {
        /// Largest node count to report.
        max: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            height,
            prefer_larger,
            node_limit,
            keys,
        } => run_build(height, prefer_larger, node_limit, keys)?,
        Commands::Heights { max } => run_heights(max)?,
    }

    Ok(())
}

fn run_build(
    height: usize,
    prefer_larger: bool,
    node_limit: Option<usize>,
    keys: Vec<i64>,
) -> Result<()> {
    let keys = if keys.is_empty() {
        read_keys_from_stdin()?
    } else {
        keys
    };

    let mut config = BuildConfig::default();
    if prefer_larger {
        config = config.with_tie_break(TieBreak::PreferLarger);
    }
    if let Some(limit) = node_limit {
        config = config.with_node_limit(limit);
    }

    let count = keys.len();
    let tree = TreeBuilder::new(config)
        .build(keys, height)
        .with_context(|| format!("failed to build tree over {count} keys"))?;

    if tree.black_height() == height {
        println!("black height {height}");
    } else {
        println!(
            "no tree with black height {height}; closest is {}",
            tree.black_height()
        );
    }
    print!("{tree}");

    Ok(())
}

fn run_heights(max: usize) -> Result<()> {
    let cache = ShapeCache::build(max).context("failed to build shape cache")?;

    println!("count\tblack\tred");
    for count in 0..=max {
        let black = join_heights(cache.black_root(count).map(|b| b.heights().collect()));
        let red = join_heights(cache.red_root(count).map(|b| b.heights().collect()));
        println!("{count}\t{black}\t{red}");
    }

    Ok(())
}

fn join_heights(heights: Option<Vec<usize>>) -> String {
    match heights {
        Some(heights) if !heights.is_empty() => heights
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
        _ => "-".to_string(),
    }
}

fn read_keys_from_stdin() -> Result<Vec<i64>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read keys from stdin")?;

    input
        .split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid key '{}' at position {}", token, idx + 1))
        })
        .collect()
}
