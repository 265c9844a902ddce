//! Fuzz target for range clamping and offset translation.
//!
//! Builds an arbitrary content tree and an arbitrary (possibly stale or
//! unordered) range, then checks that translation never panics and that any
//! produced event respects the offset invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use selspan::{Boundary, ContentTree, NodeId, RawRange, clamp, translate};

#[derive(Arbitrary, Debug)]
enum NodeSpec {
    Text(String),
    Atomic,
    Branch,
}

#[derive(Arbitrary, Debug)]
struct Input {
    recipe: Vec<(NodeSpec, u8)>,
    container: u8,
    start_node: u8,
    start_offset: u8,
    end_node: u8,
    end_offset: u8,
}

fn build_tree(recipe: &[(NodeSpec, u8)]) -> (ContentTree, Vec<NodeId>) {
    let mut tree = ContentTree::new();
    let mut branches = vec![tree.root()];
    let mut nodes = vec![tree.root()];

    for (spec, selector) in recipe.iter().take(64) {
        let parent = branches[*selector as usize % branches.len()];
        let id = match spec {
            NodeSpec::Text(text) => tree.push_text(parent, text).expect("parent is a branch"),
            NodeSpec::Atomic => tree.push_atomic(parent).expect("parent is a branch"),
            NodeSpec::Branch => {
                let id = tree.push_branch(parent).expect("parent is a branch");
                branches.push(id);
                id
            }
        };
        nodes.push(id);
    }
    (tree, nodes)
}

fuzz_target!(|input: Input| {
    let (tree, nodes) = build_tree(&input.recipe);

    // Selectors past the arena map to an id from a foreign arena, acting
    // as stale references; that is part of the surface under test.
    let mut foreign = ContentTree::new();
    let froot = foreign.root();
    let mut stale = froot;
    for _ in 0..256 {
        stale = foreign.push_atomic(froot).expect("root is a branch");
    }
    let pick = |selector: u8| -> NodeId { nodes.get(selector as usize).copied().unwrap_or(stale) };

    let container = pick(input.container);
    let raw = RawRange::new(
        Boundary::new(pick(input.start_node), input.start_offset as usize),
        Boundary::new(pick(input.end_node), input.end_offset as usize),
    );

    if let Some(clamped) = clamp(&tree, container, Some(&raw)) {
        assert!(tree.contains(container, clamped.start.node));
        assert!(tree.contains(container, clamped.end.node));
        assert_eq!(clamped.raw, raw);
    }

    if let Some(event) = translate(&tree, container, Some(&raw)) {
        let total = tree.len_units(container);
        assert!(event.start.offset <= total);
        assert!(event.end.offset <= total);
    }

    assert!(translate(&tree, container, None).is_none());
});
