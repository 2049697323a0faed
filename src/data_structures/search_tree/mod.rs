//! Unbalanced binary search tree used to sort trail listings.
//!
//! The tree is built fresh for every sort request from `(value, payload)`
//! pairs and then read back in ascending or descending order. It is never
//! rebalanced: inserting already-sorted input produces a list-shaped tree and
//! an O(n²) build. Catalogs are page-scale, so callers accept that cost but
//! must not assume logarithmic behavior.
//!
//! Key properties:
//! * Values only need `PartialOrd`; a value goes left when it is strictly less
//!   than the node's value and right otherwise, so ties go right
//! * Equal values come out of [`BinarySearchTree::sort_ascending`] in
//!   insertion order and out of [`BinarySearchTree::sort_descending`] in
//!   reverse insertion order
//! * Insertion, traversal and drop are iterative, so degenerate trees cannot
//!   overflow the call stack

mod node;

use node::{Link, TreeNode};

/// Unbalanced binary search tree keyed by a sortable value.
///
/// # Type Parameters
///
/// * `K` - Sort value (numbers, strings, anything `PartialOrd`).
/// * `P` - Payload carried alongside each value.
#[derive(Debug)]
pub struct BinarySearchTree<K, P> {
    /// Root of the tree
    root: Link<K, P>,

    /// Number of nodes
    len: usize,
}

impl<K, P> BinarySearchTree<K, P> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the smallest value (the leftmost node), or `None` when empty.
    pub fn find_min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value (the rightmost node), or `None` when empty.
    ///
    /// Among equal maxima this is the one inserted last.
    pub fn find_max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Returns an iterator visiting nodes left-root-right.
    pub fn ascending(&self) -> Traversal<'_, K, P> {
        Traversal::new(self.root.as_deref(), false)
    }

    /// Returns an iterator visiting nodes right-root-left.
    pub fn descending(&self) -> Traversal<'_, K, P> {
        Traversal::new(self.root.as_deref(), true)
    }

    /// Collects every `(value, payload)` pair in ascending order.
    ///
    /// An empty tree yields an empty vector.
    pub fn sort_ascending(&self) -> Vec<(&K, &P)> {
        self.ascending().collect()
    }

    /// Collects every `(value, payload)` pair in descending order.
    pub fn sort_descending(&self) -> Vec<(&K, &P)> {
        self.descending().collect()
    }
}

impl<K: PartialOrd, P> BinarySearchTree<K, P> {
    /// Inserts a value with its payload.
    ///
    /// Values strictly less than a node's value descend left; everything
    /// else, including equal values, descends right.
    pub fn insert(&mut self, value: K, payload: P) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(TreeNode::new(value, payload)));
        self.len += 1;
    }
}

impl<K, P> Default for BinarySearchTree<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialOrd, P> Extend<(K, P)> for BinarySearchTree<K, P> {
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (value, payload) in iter {
            self.insert(value, payload);
        }
    }
}

impl<K: PartialOrd, P> FromIterator<(K, P)> for BinarySearchTree<K, P> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, P> Drop for BinarySearchTree<K, P> {
    fn drop(&mut self) {
        // Unlink nodes one at a time; the default recursive drop would use
        // one stack frame per level of a list-shaped tree.
        let mut pending: Vec<Box<TreeNode<K, P>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// In-order iterator over a [`BinarySearchTree`].
///
/// Walks with an explicit stack holding the unvisited spine of the current
/// subtree.
#[derive(Debug, Clone)]
pub struct Traversal<'a, K, P> {
    stack: Vec<&'a TreeNode<K, P>>,
    reverse: bool,
}

impl<'a, K, P> Traversal<'a, K, P> {
    fn new(root: Option<&'a TreeNode<K, P>>, reverse: bool) -> Self {
        let mut traversal = Self {
            stack: Vec::new(),
            reverse,
        };
        traversal.push_spine(root);
        traversal
    }

    /// Pushes `node` and its chain of first-visited children.
    fn push_spine(&mut self, mut node: Option<&'a TreeNode<K, P>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = if self.reverse {
                current.right.as_deref()
            } else {
                current.left.as_deref()
            };
        }
    }
}

impl<'a, K, P> Iterator for Traversal<'a, K, P> {
    type Item = (&'a K, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let next_subtree = if self.reverse {
            node.left.as_deref()
        } else {
            node.right.as_deref()
        };
        self.push_spine(next_subtree);
        Some((&node.value, &node.payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<K: Clone, P>(pairs: &[(&K, &P)]) -> Vec<K> {
        pairs.iter().map(|(value, _)| (*value).clone()).collect()
    }

    #[test]
    fn test_empty_tree() {
        let tree: BinarySearchTree<f64, &str> = BinarySearchTree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.sort_ascending().is_empty());
        assert!(tree.sort_descending().is_empty());
        assert_eq!(tree.find_min(), None);
        assert_eq!(tree.find_max(), None);
    }

    #[test]
    fn test_numeric_ordering() {
        let tree: BinarySearchTree<f64, &str> = vec![
            (3.5, "Ridge Loop"),
            (1.2, "River Walk"),
            (7.0, "Summit Push"),
            (2.25, "Meadow Path"),
        ]
        .into_iter()
        .collect();

        assert_eq!(tree.len(), 4);
        assert_eq!(values(&tree.sort_ascending()), vec![1.2, 2.25, 3.5, 7.0]);
        assert_eq!(values(&tree.sort_descending()), vec![7.0, 3.5, 2.25, 1.2]);
        assert_eq!(tree.find_min(), Some(&1.2));
        assert_eq!(tree.find_max(), Some(&7.0));
    }

    #[test]
    fn test_string_ordering_is_lexicographic() {
        let mut tree = BinarySearchTree::new();
        for name in ["Ridge Loop", "Aspen Trail", "river walk", "Bear Creek"] {
            tree.insert(name.to_string(), ());
        }

        // Byte-wise: uppercase sorts before lowercase
        assert_eq!(
            values(&tree.sort_ascending()),
            vec!["Aspen Trail", "Bear Creek", "Ridge Loop", "river walk"]
        );
    }

    #[test]
    fn test_ties_keep_insertion_order_ascending() {
        let mut tree = BinarySearchTree::new();
        tree.insert(2, "first");
        tree.insert(1, "low");
        tree.insert(2, "second");
        tree.insert(3, "high");
        tree.insert(2, "third");

        let ascending: Vec<&str> = tree.ascending().map(|(_, p)| *p).collect();
        assert_eq!(ascending, vec!["low", "first", "second", "third", "high"]);

        let descending: Vec<&str> = tree.descending().map(|(_, p)| *p).collect();
        assert_eq!(descending, vec!["high", "third", "second", "first", "low"]);
    }

    #[test]
    fn test_sorted_input_builds_deep_tree_without_overflow() {
        // A list-shaped tree: every insert goes right
        let tree: BinarySearchTree<u32, ()> = (0..5_000).map(|i| (i, ())).collect();

        assert_eq!(tree.len(), 5_000);
        assert_eq!(tree.find_min(), Some(&0));
        assert_eq!(tree.find_max(), Some(&4_999));
        assert_eq!(tree.descending().next(), Some((&4_999, &())));
        drop(tree);
    }
}
