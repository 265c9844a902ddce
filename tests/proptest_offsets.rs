//! Property-based tests for offset computation and range clamping.
//!
//! Uses proptest to verify the structural invariants over randomized
//! content trees.

use proptest::prelude::*;
use selspan::{
    Boundary, ContentTree, NodeId, RawRange, clamp, compare_boundaries, content_units, translate,
};
use std::cmp::Ordering;

// ============================================================================
// Strategies
// ============================================================================

#[derive(Clone, Debug)]
enum NodeSpec {
    Text(String),
    Atomic,
    Branch,
}

/// A tree recipe: each entry is a node kind plus a parent selector.
fn tree_recipe() -> impl Strategy<Value = Vec<(NodeSpec, usize)>> {
    prop::collection::vec(
        (
            prop_oneof![
                "[a-z ]{0,8}".prop_map(NodeSpec::Text),
                Just(NodeSpec::Atomic),
                Just(NodeSpec::Branch),
            ],
            any::<usize>(),
        ),
        0..40,
    )
}

/// Materialize a recipe; the parent selector indexes the branches built so
/// far, so every recipe is valid.
fn build_tree(recipe: &[(NodeSpec, usize)]) -> (ContentTree, Vec<NodeId>) {
    let mut tree = ContentTree::new();
    let mut branches = vec![tree.root()];
    let mut nodes = vec![tree.root()];

    for (spec, selector) in recipe {
        let parent = branches[selector % branches.len()];
        let id = match spec {
            NodeSpec::Text(text) => tree.push_text(parent, text).unwrap(),
            NodeSpec::Atomic => tree.push_atomic(parent).unwrap(),
            NodeSpec::Branch => {
                let id = tree.push_branch(parent).unwrap();
                branches.push(id);
                id
            }
        };
        nodes.push(id);
    }
    (tree, nodes)
}

/// Independent oracle: recursive document-order walk accumulating unit
/// counts, unlike the engine's explicit-stack traversal.
fn offsets_by_walk(
    tree: &ContentTree,
    id: NodeId,
    acc: &mut usize,
    out: &mut Vec<(NodeId, usize)>,
) {
    out.push((id, *acc));
    if tree.children(id).is_empty() {
        *acc += tree.len_units(id);
    } else {
        for &child in tree.children(id) {
            offsets_by_walk(tree, child, acc, out);
        }
    }
}

// ============================================================================
// Offset properties
// ============================================================================

proptest! {
    /// offset_of matches a recursive document-order walk for every node.
    #[test]
    fn offset_matches_recursive_walk(recipe in tree_recipe()) {
        let (tree, _) = build_tree(&recipe);
        let root = tree.root();

        let mut expected = Vec::new();
        offsets_by_walk(&tree, root, &mut 0, &mut expected);

        for (node, offset) in expected {
            prop_assert_eq!(tree.offset_of(root, node), offset);
        }
    }

    /// A node's offset plus its own length never exceeds the container's.
    #[test]
    fn offset_plus_length_is_bounded(recipe in tree_recipe()) {
        let (tree, nodes) = build_tree(&recipe);
        let root = tree.root();
        let total = tree.len_units(root);

        for &node in &nodes {
            prop_assert!(tree.offset_of(root, node) + tree.len_units(node) <= total);
        }
    }

    /// The flattened character stream has exactly the tree's unit count.
    #[test]
    fn flattened_text_length_matches(recipe in tree_recipe()) {
        let (tree, _) = build_tree(&recipe);
        prop_assert_eq!(content_units(&tree.text()), tree.len_units(tree.root()));
    }

    /// A branch's length is the exact sum of its children's, with no gap
    /// or overlap.
    #[test]
    fn branch_length_is_sum_of_children(recipe in tree_recipe()) {
        let (tree, nodes) = build_tree(&recipe);
        for &node in &nodes {
            if matches!(tree.kind(node), Some(selspan::NodeKind::Branch(_))) {
                let sum: usize = tree
                    .children(node)
                    .iter()
                    .map(|&child| tree.len_units(child))
                    .sum();
                prop_assert_eq!(tree.len_units(node), sum);
            }
        }
    }
}

// ============================================================================
// Clamp properties
// ============================================================================

fn ordered_range(tree: &ContentTree, a: NodeId, b: NodeId) -> RawRange {
    let first = Boundary::new(a, 0);
    let second = Boundary::new(b, 0);
    match compare_boundaries(tree, &first, &second) {
        Some(Ordering::Greater) => RawRange::new(second, first),
        _ => RawRange::new(first, second),
    }
}

proptest! {
    /// Every range built from in-tree nodes is inside the root container,
    /// so clamping against the root is the identity.
    #[test]
    fn clamp_to_root_is_identity(recipe in tree_recipe(), i in any::<usize>(), j in any::<usize>()) {
        let (tree, nodes) = build_tree(&recipe);
        let root = tree.root();
        let raw = ordered_range(&tree, nodes[i % nodes.len()], nodes[j % nodes.len()]);

        let clamped = clamp(&tree, root, Some(&raw)).unwrap();
        prop_assert_eq!(clamped.start, raw.start);
        prop_assert_eq!(clamped.end, raw.end);
        prop_assert_eq!(clamped.raw, raw);
    }

    /// Translated offsets are ordered and bounded by the container length.
    #[test]
    fn translated_offsets_are_ordered_and_bounded(
        recipe in tree_recipe(),
        i in any::<usize>(),
        j in any::<usize>(),
    ) {
        let (tree, nodes) = build_tree(&recipe);
        let root = tree.root();
        let raw = ordered_range(&tree, nodes[i % nodes.len()], nodes[j % nodes.len()]);

        let event = translate(&tree, root, Some(&raw)).unwrap();
        prop_assert!(event.start.offset <= event.end.offset);
        prop_assert!(event.end.offset <= tree.len_units(root));
    }

    /// Clamping to an inner container always yields boundaries inside it.
    #[test]
    fn clamped_boundaries_stay_inside_container(
        recipe in tree_recipe(),
        c in any::<usize>(),
        i in any::<usize>(),
        j in any::<usize>(),
    ) {
        let (tree, nodes) = build_tree(&recipe);
        let container = nodes[c % nodes.len()];
        let raw = ordered_range(&tree, nodes[i % nodes.len()], nodes[j % nodes.len()]);

        if let Some(clamped) = clamp(&tree, container, Some(&raw)) {
            prop_assert!(tree.contains(container, clamped.start.node));
            prop_assert!(tree.contains(container, clamped.end.node));
        }
    }
}
