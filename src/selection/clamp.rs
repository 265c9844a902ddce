//! Range clamping against a container's boundaries.

use super::range::{ClampedRange, RawRange, compare_boundaries, container_span};
use crate::content::{ContentTree, NodeId};
use std::cmp::Ordering;

/// Clamp a host range to the boundaries of `container`.
///
/// Returns `None` when there is no active range, when the range does not
/// intersect the container, when the container is unknown, or when a
/// boundary node is a stale reference. Any `Some` result has both
/// boundaries within the container's subtree. The host range itself is
/// never mutated; only the returned copy is adjusted.
#[must_use]
pub fn clamp(
    tree: &ContentTree,
    container: NodeId,
    raw: Option<&RawRange>,
) -> Option<ClampedRange> {
    let raw = raw?;
    if tree.kind(container).is_none() {
        return None;
    }

    // Work on an independent copy of the host boundaries.
    let mut start = raw.start;
    let mut end = raw.end;
    let (span_start, span_end) = container_span(tree, container);

    // Fully inside: hand the copy back unmodified.
    if tree.contains(container, start.node) && tree.contains(container, end.node) {
        return Some(ClampedRange {
            start,
            end,
            raw: *raw,
        });
    }

    // Entirely before the container's start, or entirely after its end.
    if compare_boundaries(tree, &end, &span_start)? != Ordering::Greater {
        return None;
    }
    if compare_boundaries(tree, &start, &span_end)? != Ordering::Less {
        return None;
    }

    // Partial overlap: pull stray boundaries onto the container's own span.
    if compare_boundaries(tree, &start, &span_start)? == Ordering::Less {
        start = span_start;
    }
    if compare_boundaries(tree, &end, &span_end)? == Ordering::Greater {
        end = span_end;
    }

    Some(ClampedRange {
        start,
        end,
        raw: *raw,
    })
}
