//! Depth-first recursive builder.
//!
//! Produces a fully nested tree: every child is a complete subtree of the same
//! shape as the root. Recursion depth equals the requested height, there is no
//! guard against exhausting the call stack.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::branch::{node_key, Branches};

/// Root value used when the caller does not pick one.
pub const DEFAULT_ROOT: i64 = 10;

/// Tree node owning its two children, or a leaf.
///
/// Serializes as a single-entry mapping `{key: [left, right]}` (`{key: []}` for leaves).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedTree {
    key: String,
    children: Option<Box<[NestedTree; 2]>>,
}

impl NestedTree {
    pub fn leaf(value: i64) -> Self {
        Self {
            key: node_key(value),
            children: None,
        }
    }

    pub fn node(value: i64, left: NestedTree, right: NestedTree) -> Self {
        Self {
            key: node_key(value),
            children: Some(Box::new([left, right])),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Empty for leaves, `[left, right]` otherwise.
    pub fn children(&self) -> &[NestedTree] {
        match &self.children {
            Some(pair) => &pair[..],
            None => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of edge levels below this node.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(NestedTree::node_count)
            .sum::<usize>()
    }
}

impl Serialize for NestedTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, self.children())?;
        map.end()
    }
}

/// Builds a complete binary tree of `height` edge levels below `root`
/// using the default branch functions.
pub fn build_tree_recursive(height: i64, root: i64) -> NestedTree {
    build_tree_recursive_with(height, root, Branches::default())
}

/// Like [`build_tree_recursive`] with caller-supplied branch functions.
pub fn build_tree_recursive_with(height: i64, root: i64, branches: Branches) -> NestedTree {
    if height <= 0 {
        return NestedTree::leaf(root);
    }
    let (left, right) = branches.children(root);
    NestedTree::node(
        root,
        build_tree_recursive_with(height - 1, left, branches),
        build_tree_recursive_with(height - 1, right, branches),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_height_one_from_default_root() {
        let tree = build_tree_recursive(1, DEFAULT_ROOT);
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({"10": [{"31": []}, {"29": []}]})
        );
    }

    #[test]
    fn test_height_zero_is_leaf() {
        let tree = build_tree_recursive(0, 7);
        assert!(tree.is_leaf());
        assert_eq!(serde_json::to_string(&tree).unwrap(), r#"{"7":[]}"#);
    }

    #[test]
    fn test_negative_height_is_leaf() {
        assert_eq!(build_tree_recursive(-3, 10), NestedTree::leaf(10));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 3)]
    #[case(4, 31)]
    #[case(10, 2047)]
    fn test_complete_tree_size(#[case] height: i64, #[case] nodes: usize) {
        let tree = build_tree_recursive(height, DEFAULT_ROOT);
        assert_eq!(tree.node_count(), nodes);
        assert_eq!(tree.depth(), height as usize);
    }

    #[test]
    fn test_children_follow_branch_functions() {
        let tree = build_tree_recursive(2, -1);
        let keys: Vec<&str> = tree.children().iter().map(NestedTree::key).collect();
        assert_eq!(keys, vec!["-2", "-4"]);
        let grandchildren: Vec<&str> = tree.children()[0]
            .children()
            .iter()
            .map(NestedTree::key)
            .collect();
        assert_eq!(grandchildren, vec!["-5", "-7"]);
    }

    #[test]
    fn test_custom_branches() {
        let branches = Branches::new(|p| p + 1, |p| p - 1);
        let tree = build_tree_recursive_with(1, 0, branches);
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({"0": [{"1": []}, {"-1": []}]})
        );
    }
}
