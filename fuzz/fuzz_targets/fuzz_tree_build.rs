//! Fuzz target for content tree construction.
//!
//! Arbitrary push sequences against arbitrary parent ids must never panic,
//! and the resulting tree must keep its structural accounting consistent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use selspan::{ContentTree, NodeKind, content_units_with_method};

#[derive(Arbitrary, Debug)]
enum Op {
    Text(String),
    Atomic,
    Branch,
}

fuzz_target!(|ops: Vec<(Op, u8)>| {
    let mut tree = ContentTree::new();
    let mut known = vec![tree.root()];

    for (op, selector) in ops.iter().take(128) {
        // Any known id may be picked, including leaves; pushes under
        // leaves must fail cleanly rather than panic.
        let parent = known[*selector as usize % known.len()];
        let result = match op {
            Op::Text(text) => tree.push_text(parent, text),
            Op::Atomic => tree.push_atomic(parent),
            Op::Branch => tree.push_branch(parent),
        };
        if let Ok(id) = result {
            known.push(id);
        }
    }

    let root = tree.root();
    assert_eq!(tree.node_count(), known.len());
    assert_eq!(
        content_units_with_method(&tree.text(), tree.unit_method()),
        tree.len_units(root)
    );

    for &id in &known {
        assert!(tree.contains(root, id));
        match tree.kind(id) {
            Some(NodeKind::Branch(_)) => {}
            _ => assert!(tree.children(id).is_empty()),
        }
        assert!(tree.offset_of(root, id) <= tree.len_units(root));
    }
});
