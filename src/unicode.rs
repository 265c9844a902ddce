//! Content-unit counting for text nodes.

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_segmentation::UnicodeSegmentation;

/// Unit counting method for text content.
///
/// Linear offsets count one unit per element of a text node under the
/// active method, plus one unit per atomic node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnitMethod {
    /// Count Unicode scalar values.
    #[default]
    Chars,
    /// Count extended grapheme clusters.
    Graphemes,
}

const UNIT_METHOD_CHARS: u8 = 0;
const UNIT_METHOD_GRAPHEMES: u8 = 1;

static UNIT_METHOD: AtomicU8 = AtomicU8::new(UNIT_METHOD_CHARS);

/// Set the global unit method used by new trees and `content_units`.
pub fn set_unit_method(method: UnitMethod) {
    let value = match method {
        UnitMethod::Chars => UNIT_METHOD_CHARS,
        UnitMethod::Graphemes => UNIT_METHOD_GRAPHEMES,
    };
    UNIT_METHOD.store(value, Ordering::Relaxed);
}

/// Get the global unit method.
#[must_use]
pub fn unit_method() -> UnitMethod {
    match UNIT_METHOD.load(Ordering::Relaxed) {
        UNIT_METHOD_GRAPHEMES => UnitMethod::Graphemes,
        _ => UnitMethod::Chars,
    }
}

/// Count the content units in a string (global method).
#[must_use]
pub fn content_units(s: &str) -> usize {
    content_units_with_method(s, unit_method())
}

/// Count the content units in a string using a specific method.
#[must_use]
pub fn content_units_with_method(s: &str, method: UnitMethod) -> usize {
    // Fast path: ASCII text has one unit per byte under either method
    if s.is_ascii() {
        return s.len();
    }
    match method {
        UnitMethod::Chars => s.chars().count(),
        UnitMethod::Graphemes => s.graphemes(true).count(),
    }
}
