//! Linear offset computation over the content tree.

use super::node::{ContentTree, NodeId, NodeKind};

impl ContentTree {
    /// Linear offset of `target` relative to `container`.
    ///
    /// Walks the container's subtree in pre-order document order, summing
    /// content units until `target` is reached; the target's own content is
    /// not included. Text nodes contribute their unit count, atomic nodes
    /// contribute 1, branch nodes contribute only through their children.
    ///
    /// If `target` never appears in the subtree (detached or stale id), the
    /// walk exhausts the subtree and the container's full content length is
    /// returned. Callers must not read that as a validity signal; use
    /// [`contains`](ContentTree::contains) for an explicit membership check.
    #[must_use]
    pub fn offset_of(&self, container: NodeId, target: NodeId) -> usize {
        let mut stack = vec![container];
        let mut total = 0;

        while let Some(current) = stack.pop() {
            if current == target {
                break;
            }
            match self.kind(current) {
                Some(NodeKind::Text(text)) => total += self.units_of_text(text),
                Some(NodeKind::Atomic) => total += 1,
                Some(NodeKind::Branch(children)) => {
                    // Reverse push so children pop in document order
                    for &child in children.iter().rev() {
                        stack.push(child);
                    }
                }
                None => {}
            }
        }
        total
    }

    /// Total content units of the subtree rooted at `id`.
    #[must_use]
    pub fn len_units(&self, id: NodeId) -> usize {
        let mut stack = vec![id];
        let mut total = 0;

        while let Some(current) = stack.pop() {
            match self.kind(current) {
                Some(NodeKind::Text(text)) => total += self.units_of_text(text),
                Some(NodeKind::Atomic) => total += 1,
                Some(NodeKind::Branch(children)) => stack.extend(children.iter().copied()),
                None => {}
            }
        }
        total
    }

    /// Content units preceding an intra-node boundary offset within `node`.
    ///
    /// A text boundary counts units into the text, a branch boundary counts
    /// whole children, an atomic boundary is 0 (before) or 1 (after).
    /// Offsets past the node's extent are clamped to it.
    #[must_use]
    pub fn intra_units(&self, node: NodeId, offset: usize) -> usize {
        match self.kind(node) {
            Some(NodeKind::Text(text)) => offset.min(self.units_of_text(text)),
            Some(NodeKind::Atomic) => offset.min(1),
            Some(NodeKind::Branch(children)) => children
                .iter()
                .take(offset)
                .map(|&child| self.len_units(child))
                .sum(),
            None => 0,
        }
    }
}
