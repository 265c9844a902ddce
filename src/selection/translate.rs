//! Selection-change translation into linear offsets.

use super::clamp::clamp;
use super::range::{ClampedRange, RawRange};
use crate::content::{ContentTree, NodeId};

/// One translated selection endpoint.
///
/// `node` is the boundary's own node as reported by the host, not
/// re-resolved to the container; `offset` is linear from the container
/// start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionPoint {
    pub node: NodeId,
    pub offset: usize,
}

/// Structured notification describing a selection in linear offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionEvent {
    pub start: SelectionPoint,
    pub end: SelectionPoint,
    /// The clamped range the offsets were computed from.
    pub original: ClampedRange,
}

/// Translate a host range into linear offsets scoped to `container`.
///
/// Clamps the range to the container, then converts each boundary to the
/// count of content units preceding it in the container's flattened
/// document order. Returns `None` when the range is absent or does not
/// intersect the container; no event should be produced in that case.
///
/// Pure and synchronous: a point-in-time read of the tree and range with no
/// retries and no side effects.
#[must_use]
pub fn translate(
    tree: &ContentTree,
    container: NodeId,
    raw: Option<&RawRange>,
) -> Option<SelectionEvent> {
    let clamped = clamp(tree, container, raw)?;

    let start = SelectionPoint {
        node: clamped.start.node,
        offset: tree.offset_of(container, clamped.start.node)
            + tree.intra_units(clamped.start.node, clamped.start.offset),
    };
    let end = SelectionPoint {
        node: clamped.end.node,
        offset: tree.offset_of(container, clamped.end.node)
            + tree.intra_units(clamped.end.node, clamped.end.offset),
    };

    Some(SelectionEvent {
        start,
        end,
        original: clamped,
    })
}
