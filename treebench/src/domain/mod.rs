//! Domain layer: branch functions and the two tree builders
//!
//! This layer is pure: no I/O, no timing, no config loading.

pub mod adjacency;
pub mod branch;
pub mod display;
pub mod nested;

pub use adjacency::{
    build_tree_iterative, build_tree_iterative_with, AdjacencyTree, DEFAULT_ITERATIVE_HEIGHT,
};
pub use branch::{left_branch, node_key, right_branch, BranchFn, Branches};
pub use display::TreeDisplay;
pub use nested::{build_tree_recursive, build_tree_recursive_with, NestedTree, DEFAULT_ROOT};
