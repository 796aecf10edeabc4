use std::collections::HashSet;

use bucket_forest::splay::{full_splay, splay, zag, zig};
use bucket_forest::types::Node;
use bucket_forest::util::{height, inorder};

#[derive(Clone, Debug)]
struct TestNode {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
    k: i32,
}

impl TestNode {
    fn new(k: i32) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
        }
    }
}

impl Node for TestNode {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

fn inorder_keys(arena: &[TestNode], root: Option<u32>) -> Vec<i32> {
    let mut out = Vec::new();
    inorder(arena, root, |i| out.push(arena[i as usize].k));
    out
}

fn assert_tree_links(arena: &[TestNode], root: Option<u32>) {
    fn walk(
        arena: &[TestNode],
        idx: u32,
        expected_parent: Option<u32>,
        visited: &mut HashSet<u32>,
    ) {
        assert!(visited.insert(idx), "cycle detected at node {idx}");
        let node = &arena[idx as usize];

        assert_eq!(node.p, expected_parent);
        if let Some(l) = node.l {
            walk(arena, l, Some(idx), visited);
        }
        if let Some(r) = node.r {
            walk(arena, r, Some(idx), visited);
        }
    }

    let mut visited = HashSet::<u32>::new();
    if let Some(root) = root {
        walk(arena, root, None, &mut visited);
    }
}

/// Left-leaning chain of `n` nodes: keys n, n-1, .., 1 from the root down.
/// Node index i holds key n - i.
fn left_chain(n: u32) -> (Vec<TestNode>, Option<u32>) {
    let mut arena: Vec<TestNode> = (0..n).map(|i| TestNode::new((n - i) as i32)).collect();
    for i in 1..n {
        arena[(i - 1) as usize].l = Some(i);
        arena[i as usize].p = Some(i - 1);
    }
    (arena, Some(0))
}

#[test]
fn zig_zag_over_root_matrix() {
    //    10          5
    //   /  \    →     \
    //  5    20         10
    //   \              / \
    //    7            7   20
    let mut arena = vec![
        TestNode::new(10),
        TestNode::new(5),
        TestNode::new(20),
        TestNode::new(7),
    ];
    arena[0].l = Some(1);
    arena[0].r = Some(2);
    arena[1].p = Some(0);
    arena[1].r = Some(3);
    arena[2].p = Some(0);
    arena[3].p = Some(1);

    let root = zig(&mut arena, Some(0), 1);
    assert_eq!(root, Some(1));
    assert_eq!(arena[1].r, Some(0));
    assert_eq!(arena[0].l, Some(3));
    assert_eq!(inorder_keys(&arena, root), vec![5, 7, 10, 20]);
    assert_tree_links(&arena, root);

    // Rotating back restores the original shape.
    let root = zag(&mut arena, root, 0);
    assert_eq!(root, Some(0));
    assert_eq!(arena[0].l, Some(1));
    assert_eq!(arena[1].r, Some(3));
    assert_eq!(inorder_keys(&arena, root), vec![5, 7, 10, 20]);
    assert_tree_links(&arena, root);
}

#[test]
fn zig_keeps_grandparent_link_matrix() {
    //  30            30
    //  /             /
    // 10     →      5
    //  / \           \
    // 5   20          10
    //                   \
    //                    20
    let mut arena = vec![
        TestNode::new(30),
        TestNode::new(10),
        TestNode::new(5),
        TestNode::new(20),
    ];
    arena[0].l = Some(1);
    arena[1].p = Some(0);
    arena[1].l = Some(2);
    arena[1].r = Some(3);
    arena[2].p = Some(1);
    arena[3].p = Some(1);

    let root = zig(&mut arena, Some(0), 2);
    assert_eq!(root, Some(0));
    assert_eq!(arena[0].l, Some(2));
    assert_eq!(arena[2].p, Some(0));
    assert_eq!(inorder_keys(&arena, root), vec![5, 10, 20, 30]);
    assert_tree_links(&arena, root);
}

#[test]
fn splay_step_zig_zig_rotates_parent_first() {
    let (mut arena, root) = left_chain(3);
    // Deepest node (key 1) under a straight line: one step reaches root.
    let root = splay(&mut arena, root, 2);
    assert_eq!(root, Some(2));
    assert_eq!(inorder_keys(&arena, root), vec![1, 2, 3]);
    // Parent-first order hangs the old root under the old parent.
    assert_eq!(arena[2].r, Some(1));
    assert_eq!(arena[1].r, Some(0));
    assert_tree_links(&arena, root);
}

#[test]
fn splay_step_zig_zag_matrix() {
    //  20
    //  /
    // 5
    //  \
    //   10
    let mut arena = vec![TestNode::new(20), TestNode::new(5), TestNode::new(10)];
    arena[0].l = Some(1);
    arena[1].p = Some(0);
    arena[1].r = Some(2);
    arena[2].p = Some(1);

    let root = splay(&mut arena, Some(0), 2);
    assert_eq!(root, Some(2));
    assert_eq!(arena[2].l, Some(1));
    assert_eq!(arena[2].r, Some(0));
    assert_eq!(inorder_keys(&arena, root), vec![5, 10, 20]);
    assert_tree_links(&arena, root);
}

#[test]
fn full_splay_converges_and_preserves_order() {
    for n in [2u32, 3, 5, 8, 13] {
        for target in 0..n {
            let (mut arena, root) = left_chain(n);
            let root = full_splay(&mut arena, root, target);
            assert_eq!(root, Some(target), "node {target} did not reach root");
            assert_eq!(arena[target as usize].p, None);
            assert_eq!(
                inorder_keys(&arena, root),
                (1..=n as i32).collect::<Vec<_>>()
            );
            assert_tree_links(&arena, root);
        }
    }
}

#[test]
fn full_splay_of_chain_end_halves_height() {
    let (mut arena, root) = left_chain(7);
    assert_eq!(height(&arena, root), 7);
    // Key 1 lives at index 6, the deep end.
    let root = full_splay(&mut arena, root, 6);
    assert_eq!(root, Some(6));
    assert!(
        height(&arena, root) < 7,
        "chain height survived a full splay: {}",
        height(&arena, root)
    );
}

#[test]
fn full_splay_of_empty_tree_is_a_no_op() {
    let mut arena: Vec<TestNode> = Vec::new();
    assert_eq!(full_splay(&mut arena, None, 0), None);
}
