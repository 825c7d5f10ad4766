use clap::{Parser, ValueEnum};
use ordtree::Tree;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};

/// Ascending runs build a chain, and the recursive walks use a frame per level.
const MAX_CHAIN_LEN: usize = 10_000;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    /// 0, 1, 2, ... which degenerates into a right leaning chain
    Ascending,
    /// A seeded random permutation
    Shuffled,
    /// Midpoints first so the tree comes out full
    Balanced,
}

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "Times the operations of an unbalanced binary search tree")]
struct Args {
    #[arg(long, default_value = "100000")]
    size: usize,

    #[arg(long, value_enum, default_value = "shuffled")]
    order: Order,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// Repeat for more output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .init();
}

fn balanced_order(xs: &[usize], out: &mut Vec<usize>) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        out.push(xs[mid]);
        balanced_order(&xs[..mid], out);
        balanced_order(&xs[mid + 1..], out);
    }
}

fn values_for(order: Order, size: usize, seed: u64) -> Vec<usize> {
    let mut values: Vec<usize> = (0..size).collect();
    match order {
        Order::Ascending => values,
        Order::Shuffled => {
            let mut rng = StdRng::seed_from_u64(seed);
            values.shuffle(&mut rng);
            values
        }
        Order::Balanced => {
            let mut out = Vec::with_capacity(size);
            balanced_order(&values, &mut out);
            out
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut size = args.size;
    if matches!(args.order, Order::Ascending) && size > MAX_CHAIN_LEN {
        warn!(requested = size, capped = MAX_CHAIN_LEN, "capping ascending run");
        size = MAX_CHAIN_LEN;
    }

    println!(
        "Running with {:?} order and {} node count",
        args.order, size
    );

    let values = values_for(args.order, size, args.seed);
    let mut tree = Tree::new();

    let start = Instant::now();
    for &value in &values {
        tree.insert(value);
    }
    let inserted = Instant::now();
    debug!(len = tree.len(), "insert phase done");

    let found = values.iter().filter(|v| tree.find(v).is_some()).count();
    let checked_find = Instant::now();
    debug!(found, "find phase done");

    let walked = tree.dfs_in_order().len() + tree.bfs().len();
    let traversed = Instant::now();
    debug!(walked, "traversal phase done");

    info!(
        height = tree.height(),
        balanced = tree.is_balanced(),
        second_highest = ?tree.find_second_highest(),
        "shape"
    );

    let removed = values.iter().filter(|v| tree.remove(v).is_some()).count();
    let end = Instant::now();
    debug!(removed, "remove phase done");

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Finds took {} seconds",
        checked_find
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!(
        "Traversals took {} seconds",
        traversed
            .saturating_duration_since(checked_find)
            .as_secs_f32()
    );
    println!(
        "Removals took {} seconds",
        end.saturating_duration_since(traversed).as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
