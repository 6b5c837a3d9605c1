//! Breadth-first iterative builder.
//!
//! Produces a flat mapping from each expanded node's key to the keys of its two
//! children. Children are referenced by key only, never nested. The root is
//! seeded at depth 1 and only nodes with `depth < height` are expanded, so
//! `height == 1` yields an empty mapping.

use std::collections::{HashMap, VecDeque};

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::branch::{node_key, Branches};

/// Height used when the caller does not pick one.
pub const DEFAULT_ITERATIVE_HEIGHT: i64 = 5;

/// Insertion-ordered adjacency mapping: node key -> child keys.
///
/// Assigning to an existing key replaces its children in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyTree {
    entries: Vec<(String, Option<[String; 2]>)>,
    index: HashMap<String, usize>,
}

impl AdjacencyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping with a single childless entry `{key: []}`.
    pub fn single(key: String) -> Self {
        let mut tree = Self::new();
        tree.assign(key, None);
        tree
    }

    pub fn insert(&mut self, key: String, children: [String; 2]) {
        self.assign(key, Some(children));
    }

    fn assign(&mut self, key: String, children: Option<[String; 2]>) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = children,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, children));
            }
        }
    }

    /// Child keys of `key`; empty slice for the childless root entry.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&pos| children_slice(&self.entries[pos].1))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, children)| (key.as_str(), children_slice(children)))
    }

    /// First inserted key, the root of the traversal.
    pub fn root_key(&self) -> Option<&str> {
        self.entries.first().map(|(key, _)| key.as_str())
    }
}

fn children_slice(children: &Option<[String; 2]>) -> &[String] {
    match children {
        Some(pair) => &pair[..],
        None => &[],
    }
}

impl Serialize for AdjacencyTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, children) in self.iter() {
            map.serialize_entry(key, children)?;
        }
        map.end()
    }
}

/// Builds the adjacency mapping level by level using the default branch functions.
pub fn build_tree_iterative(height: i64, root: i64) -> AdjacencyTree {
    build_tree_iterative_with(height, root, Branches::default())
}

/// Like [`build_tree_iterative`] with caller-supplied branch functions.
pub fn build_tree_iterative_with(height: i64, root: i64, branches: Branches) -> AdjacencyTree {
    if height <= 0 {
        return AdjacencyTree::single(node_key(root));
    }

    let mut tree = AdjacencyTree::new();
    let mut queue = VecDeque::new();
    queue.push_back((root, 1_i64)); // (value, depth)

    while let Some((value, depth)) = queue.pop_front() {
        // nodes at the final depth are dequeued but never expanded
        if depth < height {
            let (left, right) = branches.children(value);
            tree.insert(node_key(value), [node_key(left), node_key(right)]);
            queue.push_back((left, depth + 1));
            queue.push_back((right, depth + 1));
        }
    }

    tree
}
