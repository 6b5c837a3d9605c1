//! Branch functions: compute a child value from its parent value.

/// A pure transform from parent value to child value.
pub type BranchFn = fn(i64) -> i64;

/// Left child: `3p + 1`.
pub fn left_branch(root: i64) -> i64 {
    root * 3 + 1
}

/// Right child: `3p - 1`.
pub fn right_branch(root: i64) -> i64 {
    3 * root - 1
}

/// Key under which a node value is stored in either tree shape.
pub fn node_key(value: i64) -> String {
    value.to_string()
}

/// Pair of branch functions used by both builders.
#[derive(Debug, Clone, Copy)]
pub struct Branches {
    pub left: BranchFn,
    pub right: BranchFn,
}

impl Default for Branches {
    fn default() -> Self {
        Self {
            left: left_branch,
            right: right_branch,
        }
    }
}

impl Branches {
    pub fn new(left: BranchFn, right: BranchFn) -> Self {
        Self { left, right }
    }

    /// Both children of `root`, left first.
    pub fn children(&self, root: i64) -> (i64, i64) {
        ((self.left)(root), (self.right)(root))
    }
}
