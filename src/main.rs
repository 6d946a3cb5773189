use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use booktree::catalogue::{parse_records, seeded_tree};
use booktree::{BookTree, Key, RebalanceConfig, RebalanceOutcome, RecordLimits};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "booktree", about = "Book catalogue stored in an on-demand balanced BST")]
struct Cli {
    #[command(flatten)]
    source: Source,

    /// Log rebalance decisions (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Source {
    /// Tab-separated records (`key title author year pages sold`). Defaults
    /// to the built-in seed catalogue.
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    /// Longest accepted title, in characters.
    #[arg(long, global = true, default_value_t = booktree::config::MAX_TITLE_LENGTH)]
    max_title_len: usize,

    /// Longest accepted author name, in characters.
    #[arg(long, global = true, default_value_t = booktree::config::MAX_AUTHOR_LENGTH)]
    max_author_len: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tree level by level.
    Show,
    /// Print the keys in the chosen traversal order.
    Traverse {
        #[arg(long, value_enum, default_value_t = Order::Inorder)]
        order: Order,
    },
    /// Look up a single book by key.
    Search {
        #[arg(long)]
        key: Key,
    },
    /// Rebalance, then print the tree level by level.
    Balance {
        /// Rebuild even if the tree is already balanced.
        #[arg(long)]
        always_rebuild: bool,
    },
    /// Mirror, then print the tree level by level.
    Mirror,
    /// Print every traversal, rebalance, and print them again.
    Demo,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    Inorder,
    Preorder,
    Postorder,
    Dfs,
    Bfs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut tree = load_tree(&cli.source)?;

    match cli.command {
        Commands::Show => print!("{}", tree.render_levels()),
        Commands::Traverse { order } => print_traversal(&tree, order),
        Commands::Search { key } => run_search(&tree, key),
        Commands::Balance { always_rebuild } => {
            let config = if always_rebuild {
                RebalanceConfig::always_rebuild()
            } else {
                RebalanceConfig::default()
            };
            report_outcome(tree.balance_with(&config));
            print!("{}", tree.render_levels());
        }
        Commands::Mirror => {
            tree.mirror();
            print!("{}", tree.render_levels());
        }
        Commands::Demo => run_demo(&mut tree),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn load_tree(source: &Source) -> Result<BookTree> {
    let Some(path) = &source.records else {
        return seeded_tree().context("failed to build seed catalogue");
    };

    let limits = RecordLimits {
        max_title_len: source.max_title_len,
        max_author_len: source.max_author_len,
    };
    let books = read_records(path, &limits)?;

    let mut tree = BookTree::new();
    tree.extend(books)
        .with_context(|| format!("failed to insert records from {}", path.display()))?;
    Ok(tree)
}

fn read_records(path: &Path, limits: &RecordLimits) -> Result<Vec<booktree::Book>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records from {}", path.display()))?;
    parse_records(&text, limits)
        .with_context(|| format!("failed to parse records in {}", path.display()))
}

fn print_traversal(tree: &BookTree, order: Order) {
    if tree.is_empty() {
        return;
    }

    let (label, keys) = match order {
        Order::Inorder => ("Inorder", tree.inorder_keys()),
        Order::Preorder => ("Preorder", tree.preorder_keys()),
        Order::Postorder => ("Postorder", tree.postorder_keys()),
        Order::Dfs => ("DFS", tree.dfs_keys()),
        Order::Bfs => ("BFS", tree.breadth_first_keys()),
    };
    println!("{label}: {}", join_keys(&keys));
}

fn run_search(tree: &BookTree, key: Key) {
    match tree.get(key) {
        Ok(node) => println!("{}", node.book()),
        Err(err) => println!("{err}"),
    }
}

fn report_outcome(outcome: RebalanceOutcome) {
    match outcome {
        RebalanceOutcome::Empty => println!("Tree is empty."),
        RebalanceOutcome::AlreadyBalanced { height } => {
            println!("Tree is already balanced (depth {height}).")
        }
        RebalanceOutcome::Rebuilt {
            height_before,
            height_after,
        } => println!("Rebalanced: depth {height_before} -> {height_after}."),
    }
}

fn run_demo(tree: &mut BookTree) {
    for order in [Order::Inorder, Order::Preorder, Order::Postorder, Order::Bfs] {
        print_traversal(tree, order);
    }
    println!();

    report_outcome(tree.balance());
    println!();

    for order in [Order::Inorder, Order::Preorder, Order::Postorder, Order::Bfs] {
        print_traversal(tree, order);
    }
    print!("{}", tree.render_levels());
}

fn join_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
