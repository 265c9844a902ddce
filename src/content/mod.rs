//! Tree-structured content with linear offset addressing.
//!
//! Content lives in a [`ContentTree`], an arena of tagged nodes: text runs,
//! atomic units, and branches. Every position in the tree maps to a linear
//! offset in the flattened, depth-first character stream of its container.
//!
//! Key types:
//!
//! - [`ContentTree`]: arena storage, construction, and offset queries
//! - [`NodeId`]: stable arena index identifying a node
//! - [`NodeKind`]: tagged node variant
//!
//! # Example
//!
//! ```
//! use selspan::ContentTree;
//!
//! let mut tree = ContentTree::new();
//! let root = tree.root();
//! tree.push_text(root, "ab")?;
//! let image = tree.push_atomic(root)?;
//! tree.push_text(root, "cde")?;
//!
//! assert_eq!(tree.len_units(root), 6);
//! assert_eq!(tree.offset_of(root, image), 2);
//! assert_eq!(tree.text(), "ab\u{fffc}cde");
//! # Ok::<(), selspan::Error>(())
//! ```

mod node;
mod offset;

pub use node::{ContentTree, NodeId, NodeKind, OBJECT_REPLACEMENT};
