//! Node trait definition.
//!
//! All tree "pointers" are `Option<u32>` indices into a `Vec`-backed arena
//! owned by the tree container. Tree-manipulation functions take the arena
//! as a slice and work with indices, so rotations and removal splices are
//! plain handle reassignments.

/// Structural links (`p`, `l`, `r`) every arena node exposes.
///
/// The parent link is non-owning: it is used only for upward traversal and
/// relinking during removal and rotation. Ownership of the node graph flows
/// exclusively from the tree's root handle.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Ordering predicate used by the tree containers.
///
/// `greater(a, b)` returns `true` when `a` is strictly ordered after `b`.
/// Containers apply it in both argument orders to decide descent; two
/// elements for which it is `false` both ways are tied.
pub type Greater<T> = dyn Fn(&T, &T) -> bool;

/// The `greater` predicate used by `new()` constructors.
pub(crate) fn default_greater<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}
