//! Selection ranges, container clamping, and offset translation.
//!
//! A host selection arrives as a [`RawRange`]: two `(node, offset)`
//! boundaries in document order. [`clamp`] bounds a copy of it to a
//! container, and [`translate`] turns the clamped range into a
//! [`SelectionEvent`] carrying linear offsets.
//!
//! # Example
//!
//! ```
//! use selspan::{Boundary, ContentTree, RawRange, translate};
//!
//! let mut tree = ContentTree::new();
//! let root = tree.root();
//! let ab = tree.push_text(root, "ab")?;
//! tree.push_atomic(root)?;
//! let cde = tree.push_text(root, "cde")?;
//!
//! let raw = RawRange::new(Boundary::new(ab, 1), Boundary::new(cde, 2));
//! let event = translate(&tree, root, Some(&raw)).unwrap();
//! assert_eq!(event.start.offset, 1);
//! assert_eq!(event.end.offset, 5);
//! # Ok::<(), selspan::Error>(())
//! ```

mod clamp;
mod range;
mod translate;

pub use clamp::clamp;
pub use range::{Boundary, ClampedRange, RawRange, compare_boundaries, container_span};
pub use translate::{SelectionEvent, SelectionPoint, translate};
