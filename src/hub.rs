//! Host-side selection state and surface subscriptions.

use crate::content::ContentTree;
use crate::error::{Error, Result};
use crate::selection::RawRange;
use crate::surface::HighlightSurface;
use std::fmt;
use std::sync::Arc;

/// Identifier for a surface attached to a [`SelectionHub`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(u32);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Owns the current host selection and dispatches change notifications to
/// attached surfaces.
///
/// This is the host selection API: one current range (or none), explicit
/// attach/detach subscriptions, and the content write path that clears the
/// selection on identity change. Every attached surface processes every
/// notification independently; translation is a pure read, so overlapping
/// containers simply observe the same change redundantly.
#[derive(Debug, Default)]
pub struct SelectionHub {
    current: Option<RawRange>,
    surfaces: Vec<Option<HighlightSurface>>,
    free_list: Vec<u32>,
}

impl SelectionHub {
    /// Create a hub with no selection and no surfaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a surface; it observes every subsequent selection change
    /// until detached.
    pub fn attach(&mut self, surface: HighlightSurface) -> SurfaceId {
        if let Some(idx) = self.free_list.pop() {
            self.surfaces[idx as usize] = Some(surface);
            return SurfaceId(idx);
        }
        self.surfaces.push(Some(surface));
        SurfaceId((self.surfaces.len() - 1) as u32)
    }

    /// Detach a surface, ending its subscription.
    pub fn detach(&mut self, id: SurfaceId) -> Option<HighlightSurface> {
        let slot = self.surfaces.get_mut(id.0 as usize)?;
        let surface = slot.take()?;
        self.free_list.push(id.0);
        Some(surface)
    }

    /// Shared access to an attached surface.
    #[must_use]
    pub fn surface(&self, id: SurfaceId) -> Option<&HighlightSurface> {
        self.surfaces.get(id.0 as usize)?.as_ref()
    }

    /// Mutable access to an attached surface.
    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut HighlightSurface> {
        self.surfaces.get_mut(id.0 as usize)?.as_mut()
    }

    /// Number of attached surfaces.
    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.surfaces.iter().filter(|slot| slot.is_some()).count()
    }

    /// The current host range, if any.
    #[must_use]
    pub fn current_range(&self) -> Option<&RawRange> {
        self.current.as_ref()
    }

    /// Record a new selection and notify every attached surface.
    pub fn set_range(&mut self, raw: RawRange) {
        self.current = Some(raw);
        self.notify();
    }

    /// Drop the current selection.
    ///
    /// Surfaces are notified only when a range was actually present.
    pub fn clear_selection(&mut self) {
        if self.current.take().is_some() {
            self.notify();
        }
    }

    /// Replace a surface's content reference.
    ///
    /// A write with a distinct identity clears the host selection; writing
    /// the same reference back is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSurface`] if `id` is not attached.
    pub fn set_content(&mut self, id: SurfaceId, content: Arc<ContentTree>) -> Result<()> {
        let Some(surface) = self.surface_mut(id) else {
            return Err(Error::UnknownSurface { id });
        };
        if surface.replace_content(content) {
            self.clear_selection();
        }
        Ok(())
    }

    fn notify(&mut self) {
        let current = self.current;
        for surface in self.surfaces.iter_mut().flatten() {
            surface.handle_selection_change(current.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Boundary;

    fn sample_content() -> Arc<ContentTree> {
        let mut tree = ContentTree::new();
        let root = tree.root();
        tree.push_text(root, "ab").unwrap();
        tree.push_text(root, "cd").unwrap();
        Arc::new(tree)
    }

    #[test]
    fn test_attach_detach() {
        let content = sample_content();
        let mut hub = SelectionHub::new();

        let a = hub.attach(HighlightSurface::new(Arc::clone(&content)));
        let b = hub.attach(HighlightSurface::new(Arc::clone(&content)));
        assert_eq!(hub.surface_count(), 2);
        assert_ne!(a, b);

        assert!(hub.detach(a).is_some());
        assert!(hub.detach(a).is_none());
        assert_eq!(hub.surface_count(), 1);

        // Freed slot is reused
        let c = hub.attach(HighlightSurface::new(content));
        assert_eq!(c, a);
    }

    #[test]
    fn test_set_and_clear_range() {
        let content = sample_content();
        let text = content.children(content.root())[0];
        let mut hub = SelectionHub::new();
        hub.attach(HighlightSurface::new(content));

        assert!(hub.current_range().is_none());

        let raw = RawRange::new(Boundary::new(text, 0), Boundary::new(text, 2));
        hub.set_range(raw);
        assert_eq!(hub.current_range(), Some(&raw));

        hub.clear_selection();
        assert!(hub.current_range().is_none());
        // Clearing twice stays quiet
        hub.clear_selection();
        assert!(hub.current_range().is_none());
    }

    #[test]
    fn test_set_content_clears_selection() {
        let content = sample_content();
        let text = content.children(content.root())[0];
        let mut hub = SelectionHub::new();
        let id = hub.attach(HighlightSurface::new(Arc::clone(&content)));

        hub.set_range(RawRange::collapsed(Boundary::new(text, 1)));
        assert!(hub.current_range().is_some());

        // Same identity: selection survives
        hub.set_content(id, Arc::clone(&content)).unwrap();
        assert!(hub.current_range().is_some());

        // Distinct identity: selection cleared
        hub.set_content(id, sample_content()).unwrap();
        assert!(hub.current_range().is_none());
    }

    #[test]
    fn test_set_content_unknown_surface() {
        let mut hub = SelectionHub::new();
        let content = sample_content();
        let id = hub.attach(HighlightSurface::new(Arc::clone(&content)));
        hub.detach(id);

        let err = hub.set_content(id, content).unwrap_err();
        assert!(matches!(err, Error::UnknownSurface { .. }));
    }
}
