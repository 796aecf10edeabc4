//! The capability contract shared by all tree variants.

use std::collections::VecDeque;

use crate::error::TreeError;

/// Traversal order selector for the default iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraverseOrder {
    Preorder,
    Postorder,
    Inorder,
}

/// Contract every tree variant satisfies.
///
/// Ordering comes from a predicate injected at construction, not from a
/// trait bound on `T`, so the contract itself leaves `T` unconstrained.
/// Lookups that miss are programmer errors: `remove` and `height_of` panic
/// on an absent element. Extremal queries return the whole bucket of the
/// terminal node, `None` on an empty tree.
pub trait BinaryTree<T> {
    /// Adds `element` according to the semantics of the implementor.
    fn add(&mut self, element: T);

    /// Removes `element`. Panics if it is not in the tree; check membership
    /// first when graceful handling is required.
    fn remove(&mut self, element: &T) -> bool;

    /// Height of the tree in nodes. 0 for an empty tree.
    fn height(&self) -> usize;

    /// Height of the subtree rooted at the node holding `element`. Panics
    /// if `element` is not in the tree.
    fn height_of(&self, element: &T) -> usize;

    /// Bucket of the root node.
    fn root(&self) -> Option<&[T]>;

    /// Bucket of the leftmost node.
    fn leftmost(&self) -> Option<&[T]>;

    /// Bucket of the rightmost node.
    fn rightmost(&self) -> Option<&[T]>;

    /// Invokes `visit` for every element in preorder. Bucket members are
    /// visited together in arrival order at their node's position.
    fn for_each_preorder<'a>(&'a self, visit: &mut dyn FnMut(&'a T));

    /// Invokes `visit` for every element in postorder.
    fn for_each_postorder<'a>(&'a self, visit: &mut dyn FnMut(&'a T));

    /// Invokes `visit` for every element in order.
    fn for_each_inorder<'a>(&'a self, visit: &mut dyn FnMut(&'a T));

    /// Traversal order used by [`BinaryTree::iter`]. Optional; the default
    /// reports that the implementor has no traversal selector.
    fn traverse_type(&self) -> Result<TraverseOrder, TreeError> {
        Err(TreeError::TraversalUnsupported)
    }

    /// Default iterator: the entire traversal order picked by
    /// [`BinaryTree::traverse_type`] is copied into a queue up front and
    /// consumed from there, so the iteration is a snapshot rather than a
    /// live view. Panics if `traverse_type` reports unsupported.
    fn iter(&self) -> TreeIter<'_, T> {
        let mut order = VecDeque::new();
        match self.traverse_type() {
            Ok(TraverseOrder::Preorder) => self.for_each_preorder(&mut |e| order.push_back(e)),
            Ok(TraverseOrder::Postorder) => self.for_each_postorder(&mut |e| order.push_back(e)),
            Ok(TraverseOrder::Inorder) => self.for_each_inorder(&mut |e| order.push_back(e)),
            Err(err) => panic!("{err}"),
        }
        TreeIter { order }
    }
}

/// Queue-backed iterator returned by [`BinaryTree::iter`].
pub struct TreeIter<'a, T> {
    pub(crate) order: VecDeque<&'a T>,
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.order.pop_front()
    }
}

impl<T> ExactSizeIterator for TreeIter<'_, T> {
    fn len(&self) -> usize {
        self.order.len()
    }
}
