//! Order-aware linked search trees with tie-bucketed nodes.
//!
//! Two containers share one capability contract ([`BinaryTree`]) and one
//! arena-backed node layout:
//!
//! - [`LinkedBst`] — unbalanced binary search tree ordered by an injected
//!   `greater` predicate; elements the predicate ties are grouped in one
//!   node's bucket.
//! - [`SplayTree`] — the same engine plus rotation-based self-adjustment,
//!   triggered per operation by a [`SplayCases`] policy and an optional
//!   cold-read path-length threshold.
//!
//! Instead of raw pointers, all node links are `Option<u32>` indices into
//! a tree-owned `Vec` arena, so rotations and removal splices are handle
//! reassignments with no pointer invalidation risk.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait, ordering-predicate alias |
//! | [`node`] | [`BucketNode`] storage unit |
//! | [`tree`] | [`BinaryTree`] contract, [`TraverseOrder`], [`TreeIter`] |
//! | [`util`] | arena walks and the structural `remove` |
//! | [`splay`] | `zig` / `zag` rotations, `splay`, `full_splay` |
//! | [`linked_bst`] | [`LinkedBst`] container and [`SubTree`] view |
//! | [`splay_tree`] | [`SplayTree`] container and [`SplayCases`] |
//! | [`error`] | [`TreeError`] |

pub mod error;
pub mod linked_bst;
pub mod node;
mod print;
pub mod splay;
pub mod splay_tree;
pub mod tree;
pub mod types;
pub mod util;

pub use error::TreeError;
pub use linked_bst::{LinkedBst, SubTree};
pub use node::BucketNode;
pub use splay::{full_splay, splay, zag, zig};
pub use splay_tree::{SplayCases, SplayTree, DEFAULT_COLD_READ_THRESHOLD};
pub use tree::{BinaryTree, TraverseOrder, TreeIter};
pub use types::{Greater, Node};
pub use util::{height, inorder, leftmost, postorder, preorder, remove, rightmost};
