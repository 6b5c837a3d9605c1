/*
Both tree shapes render through termtree so they can be inspected side by side.
The nested shape maps one-to-one onto termtree nodes. The adjacency shape is
walked from its first key, resolving child keys back through the mapping; keys
that were never expanded become leaves.
 */
use termtree::Tree;
use tracing::instrument;

use super::adjacency::AdjacencyTree;
use super::nested::NestedTree;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for NestedTree {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(self.key().to_string()).with_leaves(leaves)
    }
}

impl TreeDisplay for AdjacencyTree {
    fn to_tree_string(&self) -> Tree<String> {
        fn build(tree: &AdjacencyTree, key: &str, path: &mut Vec<String>) -> Tree<String> {
            let mut node = Tree::new(key.to_string());
            // a key already on the current path would recurse forever
            if path.iter().any(|seen| seen == key) {
                return node;
            }
            if let Some(children) = tree.get(key) {
                path.push(key.to_string());
                for child in children {
                    node.push(build(tree, child, path));
                }
                path.pop();
            }
            node
        }

        match self.root_key() {
            Some(root) => build(self, root, &mut Vec::new()),
            None => Tree::new("(empty)".to_string()),
        }
    }
}
