//! The selection-observing component surface.

use crate::content::{ContentTree, NodeId};
use crate::error::{Error, Result};
use crate::event::{ListenerId, ListenerSet, LogLevel, emit_log};
use crate::selection::{RawRange, SelectionEvent, translate};
use std::sync::Arc;

/// Observes selection changes over one content container and emits
/// linear-offset events to its own listeners.
///
/// A surface is attached to a [`SelectionHub`](crate::SelectionHub), which
/// drives it on every selection change. Events are scoped to the surface:
/// nothing is broadcast globally, and a selection that does not intersect
/// the container produces no event at all.
#[derive(Debug)]
pub struct HighlightSurface {
    content: Arc<ContentTree>,
    container: NodeId,
    listeners: ListenerSet,
}

impl HighlightSurface {
    /// Create a surface scoped to the tree's root.
    #[must_use]
    pub fn new(content: Arc<ContentTree>) -> Self {
        let container = content.root();
        Self {
            content,
            container,
            listeners: ListenerSet::default(),
        }
    }

    /// Create a surface scoped to an inner container node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `container` is not in the tree.
    pub fn with_container(content: Arc<ContentTree>, container: NodeId) -> Result<Self> {
        if content.kind(container).is_none() {
            return Err(Error::UnknownNode { id: container });
        }
        Ok(Self {
            content,
            container,
            listeners: ListenerSet::default(),
        })
    }

    /// The content reference this surface observes.
    #[must_use]
    pub fn content(&self) -> &Arc<ContentTree> {
        &self.content
    }

    /// The container node scoping all offsets.
    #[must_use]
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Register a listener for translated selection events.
    pub fn on_select<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&SelectionEvent) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Remove a previously registered listener.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Translate a host range against this surface's container.
    ///
    /// Pure and synchronous; does not emit to listeners.
    #[must_use]
    pub fn translate_now(&self, raw: Option<&RawRange>) -> Option<SelectionEvent> {
        translate(&self.content, self.container, raw)
    }

    /// Swap in a new content reference. Returns whether the identity
    /// changed.
    ///
    /// An identity change rescopes the surface to the new tree's root;
    /// writing the same `Arc` back is a no-op. The caller is responsible
    /// for clearing the host selection afterwards;
    /// [`SelectionHub::set_content`](crate::SelectionHub::set_content) does
    /// both.
    pub fn replace_content(&mut self, content: Arc<ContentTree>) -> bool {
        if Arc::ptr_eq(&self.content, &content) {
            return false;
        }
        self.container = content.root();
        self.content = content;
        true
    }

    pub(crate) fn handle_selection_change(&mut self, raw: Option<&RawRange>) {
        match self.translate_now(raw) {
            Some(event) => {
                emit_log(
                    LogLevel::Debug,
                    &format!(
                        "selection {}..{} in {}",
                        event.start.offset, event.end.offset, self.container
                    ),
                );
                self.listeners.emit(&event);
            }
            None => emit_log(
                LogLevel::Debug,
                &format!("selection outside {}", self.container),
            ),
        }
    }
}
