use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "algolab", about = "Comparison-counted algorithm laboratory", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check parenthesized tree strings read from stdin
    Validate,
    /// Validate stdin trees and report height, node and leaf counts
    Analyze,
    /// Load one tree into the array layout and print its traversals
    Traverse,
    /// Linear versus BST search on a single random target
    SearchDemo {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Array, BST and AVL lookups over four dataset shapes
    SearchBench {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Adjacency matrix versus adjacency list on random graphs
    GraphBench {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// All-pairs BFS distances on a random graph
    ShortestPaths {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Insertion sort against the shell sort gap schedules
    ShellBench {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 100)]
        trials: usize,
        #[arg(long)]
        json: bool,
    },
    /// Full sorting matrix over a student CSV
    SortBench {
        csv: PathBuf,
        #[arg(long, default_value_t = 1000)]
        reps: usize,
        #[arg(long)]
        json: bool,
    },
    /// Sequential versus sort-then-binary search on product scores
    ScoreSearch {
        csv: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Search, insert and delete one record per table layout
    TableOps {
        csv: PathBuf,
        id: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
}
