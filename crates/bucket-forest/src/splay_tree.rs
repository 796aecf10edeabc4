//! Self-adjusting tree: a [`LinkedBst`] that splays accessed nodes toward
//! the root according to a configurable trigger policy.

use std::fmt::Display;

use bitflags::bitflags;

use crate::error::{missing_element_error, TreeError};
use crate::linked_bst::{LinkedBst, SubTree};
use crate::splay::full_splay;
use crate::tree::{BinaryTree, TraverseOrder, TreeIter};
use crate::types::default_greater;

bitflags! {
    /// Operations after which a [`SplayTree`] performs a full splay.
    ///
    /// `ON_COLD_READ` additionally requires the lookup's path length to
    /// reach the tree's cold-read threshold.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SplayCases: u16 {
        const WHEN_REMOVING = 1 << 9;
        const WHEN_FINDING  = 1 << 10;
        const WHEN_ADDING   = 1 << 11;
        const ON_COLD_READ  = 1 << 12;
    }
}

/// Path length at which a lookup counts as cold when `ON_COLD_READ` is set.
pub const DEFAULT_COLD_READ_THRESHOLD: usize = 4;

fn verify_splay_cases(cases: SplayCases) {
    if cases.is_empty() {
        panic!("{}", TreeError::InvalidSplayCases(cases.bits()));
    }
}

/// Splay tree: functions identically to [`LinkedBst`] with the additional
/// property of splaying on configured operations. A splay rotates a node
/// up the tree until it is the root while maintaining the search ordering,
/// biasing future accesses toward recently touched nodes.
pub struct SplayTree<T, G = fn(&T, &T) -> bool>
where
    G: Fn(&T, &T) -> bool,
{
    bst: LinkedBst<T, G>,
    cases: SplayCases,
    cold_read_threshold: usize,
}

impl<T> SplayTree<T, fn(&T, &T) -> bool>
where
    T: PartialOrd,
{
    /// Tree ordered by `>`, splaying on finds, iterating in preorder.
    pub fn new() -> Self {
        Self::with_greater(default_greater::<T>)
    }
}

impl<T> Default for SplayTree<T, fn(&T, &T) -> bool>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G> SplayTree<T, G>
where
    G: Fn(&T, &T) -> bool,
{
    /// Tree ordered by `greater`, splaying on finds, iterating in preorder.
    pub fn with_greater(greater: G) -> Self {
        Self::with_config(greater, TraverseOrder::Preorder, SplayCases::WHEN_FINDING)
    }

    /// Tree ordered by `greater` with the given splay cases. Panics on an
    /// empty case set.
    pub fn with_cases(greater: G, cases: SplayCases) -> Self {
        Self::with_config(greater, TraverseOrder::Preorder, cases)
    }

    /// Fully configured tree. Panics on an empty case set.
    pub fn with_config(greater: G, order: TraverseOrder, cases: SplayCases) -> Self {
        verify_splay_cases(cases);
        Self {
            bst: LinkedBst::with_traversal(greater, order),
            cases,
            cold_read_threshold: DEFAULT_COLD_READ_THRESHOLD,
        }
    }

    /// Adds `case` to the current splay cases. Panics on an empty argument.
    pub fn add_case(&mut self, case: SplayCases) {
        verify_splay_cases(case);
        self.cases |= case;
    }

    /// Removes `case` from the current splay cases. Panics on an empty
    /// argument.
    pub fn remove_case(&mut self, case: SplayCases) {
        verify_splay_cases(case);
        self.cases -= case;
    }

    /// Minimum access path length at which a lookup counts as cold.
    pub fn cold_read_threshold(&self) -> usize {
        self.cold_read_threshold
    }

    /// Sets the cold-read threshold. Only has any effect while
    /// `ON_COLD_READ` is set. Panics on zero.
    pub fn set_cold_read_threshold(&mut self, threshold: usize) {
        if threshold == 0 {
            panic!("{}", TreeError::InvalidColdReadThreshold);
        }
        self.cold_read_threshold = threshold;
    }

    pub fn size(&self) -> usize {
        self.bst.size()
    }

    pub fn is_empty(&self) -> bool {
        self.bst.is_empty()
    }

    pub fn clear(&mut self) {
        self.bst.clear();
    }

    /// Whether `element` is in this tree, splaying its node to the top if
    /// `WHEN_FINDING` is set, or if `ON_COLD_READ` is set and the access
    /// path was long enough to count as cold.
    pub fn contains(&mut self, element: &T) -> bool {
        let access = self.bst.access(element);
        match access.node {
            Some(node) => {
                if self.splays_on_access(access.path_length) {
                    self.splay_node(node);
                }
                true
            }
            None => false,
        }
    }

    /// Bucket of the node tied with `element`, with the same splay policy
    /// as [`SplayTree::contains`].
    pub fn get(&mut self, element: &T) -> Option<&[T]> {
        let access = self.bst.access(element);
        let node = access.node?;
        if self.splays_on_access(access.path_length) {
            self.splay_node(node);
        }
        Some(self.bst.arena[node as usize].bucket.as_slice())
    }

    /// Read-only subtree view; see [`LinkedBst::subtree_with_root`].
    pub fn subtree_with_root(&self, element: &T) -> SubTree<'_, T> {
        self.bst.subtree_with_root(element)
    }

    pub fn to_string(&self, tab: &str) -> String
    where
        T: Display,
    {
        crate::print::dump("SplayTree", &self.bst.arena, self.bst.root, tab)
    }

    fn splays_when(&self, case: SplayCases) -> bool {
        self.cases.contains(case)
    }

    fn splays_on_access(&self, path_length: usize) -> bool {
        self.splays_when(SplayCases::WHEN_FINDING)
            || (self.splays_when(SplayCases::ON_COLD_READ)
                && path_length >= self.cold_read_threshold)
    }

    fn splay_node(&mut self, node: u32) {
        self.bst.root = full_splay(&mut self.bst.arena, self.bst.root, node);
    }
}

impl<T, G> BinaryTree<T> for SplayTree<T, G>
where
    G: Fn(&T, &T) -> bool,
{
    /// Adds `element`, splaying its node to the root if `WHEN_ADDING` is
    /// set.
    fn add(&mut self, element: T) {
        let node = self.bst.insert_element(element);
        if self.splays_when(SplayCases::WHEN_ADDING) {
            self.splay_node(node);
        }
    }

    /// Removes `element`, splaying its node first if `WHEN_REMOVING` is
    /// set. Panics if `element` is not in the tree.
    fn remove(&mut self, element: &T) -> bool {
        let Some(node) = self.bst.access(element).node else {
            missing_element_error()
        };
        if self.splays_when(SplayCases::WHEN_REMOVING) {
            self.splay_node(node);
        }
        self.bst.remove(element)
    }

    fn height(&self) -> usize {
        self.bst.height()
    }

    fn height_of(&self, element: &T) -> usize {
        self.bst.height_of(element)
    }

    fn root(&self) -> Option<&[T]> {
        self.bst.root()
    }

    fn leftmost(&self) -> Option<&[T]> {
        self.bst.leftmost()
    }

    fn rightmost(&self) -> Option<&[T]> {
        self.bst.rightmost()
    }

    fn for_each_preorder<'a>(&'a self, visit: &mut dyn FnMut(&'a T)) {
        self.bst.for_each_preorder(visit);
    }

    fn for_each_postorder<'a>(&'a self, visit: &mut dyn FnMut(&'a T)) {
        self.bst.for_each_postorder(visit);
    }

    fn for_each_inorder<'a>(&'a self, visit: &mut dyn FnMut(&'a T)) {
        self.bst.for_each_inorder(visit);
    }

    fn traverse_type(&self) -> Result<TraverseOrder, TreeError> {
        self.bst.traverse_type()
    }
}

impl<'a, T, G> IntoIterator for &'a SplayTree<T, G>
where
    G: Fn(&T, &T) -> bool,
{
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> TreeIter<'a, T> {
        self.iter()
    }
}
