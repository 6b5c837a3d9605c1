//! Compare recursive (depth-first) and iterative (breadth-first) construction
//! of complete binary trees.
//!
//! - [`domain`]: branch functions and the two builders
//! - [`application`]: minimum-of-repeats timing and the per-height comparison
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing, reporting and plotting

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
