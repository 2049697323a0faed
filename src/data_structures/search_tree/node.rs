//! Node implementation for the binary search tree.

/// Owned link to a subtree.
pub type Link<K, P> = Option<Box<TreeNode<K, P>>>;

/// A node in the binary search tree.
///
/// Every value in `left` is strictly less than `value`; every value in
/// `right` is greater than or equal to it.
#[derive(Debug)]
pub struct TreeNode<K, P> {
    /// Sort value
    pub value: K,

    /// Record carried along with the value
    pub payload: P,

    /// Strictly smaller values
    pub left: Link<K, P>,

    /// Greater or equal values
    pub right: Link<K, P>,
}

impl<K, P> TreeNode<K, P> {
    /// Creates a new leaf node.
    pub fn new(value: K, payload: P) -> Self {
        Self {
            value,
            payload,
            left: None,
            right: None,
        }
    }
}
