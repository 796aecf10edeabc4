//! Arena walk and surgery functions.
//!
//! Everything here is generic over the [`Node`] link trait and works purely
//! with handles: extremal descent, iterative traversal orders, iterative
//! height, and the three-case structural `remove`. Walks use explicit
//! stacks so depth never translates into call-stack growth, which matters
//! for the degenerate chains an unbalanced tree can form.

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn leftmost<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub fn rightmost<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// Height of the subtree under `root`, in nodes. 0 for an empty subtree.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let Some(root) = root else {
        return 0;
    };
    let mut max = 0;
    let mut stack = vec![(root, 1usize)];
    while let Some((idx, depth)) = stack.pop() {
        if depth > max {
            max = depth;
        }
        if let Some(l) = get_l(arena, idx) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, idx) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Visits every node under `root` in preorder.
pub fn preorder<N: Node>(arena: &[N], root: Option<u32>, mut visit: impl FnMut(u32)) {
    let mut stack = Vec::new();
    if let Some(root) = root {
        stack.push(root);
    }
    while let Some(idx) = stack.pop() {
        visit(idx);
        if let Some(r) = get_r(arena, idx) {
            stack.push(r);
        }
        if let Some(l) = get_l(arena, idx) {
            stack.push(l);
        }
    }
}

/// Visits every node under `root` in postorder.
pub fn postorder<N: Node>(arena: &[N], root: Option<u32>, mut visit: impl FnMut(u32)) {
    // Reverse preorder with flipped children, replayed backwards.
    let mut stack = Vec::new();
    let mut order = Vec::new();
    if let Some(root) = root {
        stack.push(root);
    }
    while let Some(idx) = stack.pop() {
        order.push(idx);
        if let Some(l) = get_l(arena, idx) {
            stack.push(l);
        }
        if let Some(r) = get_r(arena, idx) {
            stack.push(r);
        }
    }
    for idx in order.into_iter().rev() {
        visit(idx);
    }
}

/// Visits every node under `root` in order.
pub fn inorder<N: Node>(arena: &[N], root: Option<u32>, mut visit: impl FnMut(u32)) {
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(idx) = curr {
            stack.push(idx);
            curr = get_l(arena, idx);
        }
        let Some(idx) = stack.pop() else {
            break;
        };
        visit(idx);
        curr = get_r(arena, idx);
    }
}

/// Removes `node` from the tree rooted at `root` and returns the new root.
///
/// Three cases:
/// - leaf: detached from its parent's child slot;
/// - one child: the sole child is spliced into the node's former slot;
/// - two children: the in-order successor (leftmost of the right subtree)
///   is detached, its right subtree handed to its former parent's left
///   slot, and the successor spliced into the node's position inheriting
///   both children. A successor that *is* the node's right child keeps its
///   own right subtree and only inherits the left child.
///
/// The removed node's links are cleared; its arena slot stays behind.
pub fn remove<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    match (l, r) {
        (None, None) => {
            let Some(p) = p else {
                return None;
            };
            if get_l(arena, p) == Some(node) {
                set_l(arena, p, None);
            } else {
                set_r(arena, p, None);
            }
            root
        }
        (Some(l), Some(r)) => {
            let mut successor = r;
            while let Some(sl) = get_l(arena, successor) {
                successor = sl;
            }

            if successor == r {
                // Successor is the node's own right child: it keeps its
                // right subtree and only takes over the left child.
                set_l(arena, successor, Some(l));
                set_p(arena, l, Some(successor));
            } else {
                // The successor is leftmost, so it has no left child; its
                // right subtree moves into its parent's left slot.
                let sp = get_p(arena, successor).unwrap();
                let sr = get_r(arena, successor);
                set_l(arena, sp, sr);
                if let Some(sr) = sr {
                    set_p(arena, sr, Some(sp));
                }
                set_l(arena, successor, Some(l));
                set_p(arena, l, Some(successor));
                set_r(arena, successor, Some(r));
                set_p(arena, r, Some(successor));
            }

            set_p(arena, successor, p);
            match p {
                Some(p) => {
                    if get_l(arena, p) == Some(node) {
                        set_l(arena, p, Some(successor));
                    } else {
                        set_r(arena, p, Some(successor));
                    }
                    root
                }
                None => Some(successor),
            }
        }
        _ => {
            let child = l.or(r).unwrap();
            set_p(arena, child, p);
            match p {
                Some(p) => {
                    if get_l(arena, p) == Some(node) {
                        set_l(arena, p, Some(child));
                    } else {
                        set_r(arena, p, Some(child));
                    }
                    root
                }
                None => Some(child),
            }
        }
    }
}
