//! Tree dump used by the containers' `to_string`.

use std::fmt::Display;

use crate::node::BucketNode;

pub(crate) fn dump<T: Display>(
    label: &str,
    arena: &[BucketNode<T>],
    root: Option<u32>,
    tab: &str,
) -> String {
    match root {
        Some(root) => format!("{label}{}", dump_node(arena, root, tab, "└─")),
        None => format!("{label} ∅"),
    }
}

fn dump_node<T: Display>(arena: &[BucketNode<T>], node: u32, tab: &str, side: &str) -> String {
    let n = &arena[node as usize];
    let mut s = format!("\n{tab}{side} {} ×{}", n.head(), n.bucket.len());
    if let Some(l) = n.l {
        s.push_str(&dump_node(arena, l, &format!("{tab}  "), "←"));
    }
    if let Some(r) = n.r {
        s.push_str(&dump_node(arena, r, &format!("{tab}  "), "→"));
    }
    s
}
