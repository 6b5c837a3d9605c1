//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

/// Compare recursive and iterative construction of complete binary trees
#[derive(Parser, Debug)]
#[command(name = "treebench")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file, overrides the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Benchmark both builders per height, print and plot (default)
    Compare {
        /// Print timings only, skip the chart
        #[arg(long)]
        no_plot: bool,
        /// Do not wait for Enter after the chart
        #[arg(long)]
        no_wait: bool,
    },

    /// Build one tree and print it
    Show {
        /// Construction strategy
        #[arg(short, long, value_enum, default_value_t = Strategy::Recursive)]
        strategy: Strategy,
        /// Tree height
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        height: i64,
        /// Root value (default: configured root)
        #[arg(short, long, allow_negative_numbers = true)]
        root: Option<i64>,
        /// Print the mapping as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Depth-first, nested subtrees
    Recursive,
    /// Breadth-first queue, flat adjacency mapping
    Iterative,
}
