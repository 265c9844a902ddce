//! `selspan` - Selection-to-offset translation for tree-structured content
//!
//! Observes a text selection over a bounded content container and
//! re-expresses it as linear character offsets instead of raw node
//! references, emitting a structured change notification per container.
//!
//! Content is an arena-backed tree of tagged nodes: text runs, atomic units
//! (embedded media, counted as one unit), and branches. A selection arrives
//! as a pair of `(node, offset)` boundaries; the engine clamps it to the
//! container, then converts each boundary to its position in the container's
//! flattened, depth-first character stream.
//!
//! # Example
//!
//! ```
//! use selspan::{Boundary, ContentTree, HighlightSurface, RawRange, SelectionHub};
//! use std::sync::Arc;
//!
//! let mut tree = ContentTree::new();
//! let root = tree.root();
//! let hello = tree.push_text(root, "Hello, ")?;
//! let _image = tree.push_atomic(root)?;
//! let world = tree.push_text(root, "world")?;
//!
//! let mut hub = SelectionHub::new();
//! let id = hub.attach(HighlightSurface::new(Arc::new(tree)));
//!
//! hub.set_range(RawRange::new(
//!     Boundary::new(hello, 2),
//!     Boundary::new(world, 3),
//! ));
//!
//! let event = hub
//!     .surface(id)
//!     .unwrap()
//!     .translate_now(hub.current_range())
//!     .unwrap();
//! assert_eq!(event.start.offset, 2);
//! assert_eq!(event.end.offset, 11); // "Hello, " (7) + atomic (1) + 3
//! # Ok::<(), selspan::Error>(())
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow NodeKind, SelectionEvent etc
#![allow(clippy::cast_possible_truncation)] // Arena and slab indices fit u32
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod content;
pub mod error;
pub mod event;
pub mod hub;
pub mod selection;
pub mod surface;
pub mod unicode;

// Re-export core types at crate root
pub use content::{ContentTree, NodeId, NodeKind, OBJECT_REPLACEMENT};
pub use error::{Error, Result};
pub use event::{ListenerId, LogLevel, emit_log, set_log_callback};
pub use hub::{SelectionHub, SurfaceId};
pub use selection::{
    Boundary, ClampedRange, RawRange, SelectionEvent, SelectionPoint, clamp, compare_boundaries,
    container_span, translate,
};
pub use surface::HighlightSurface;
pub use unicode::{UnitMethod, content_units, content_units_with_method, set_unit_method, unit_method};
