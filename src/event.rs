//! Log callback and per-surface listener plumbing.
//!
//! Selection events are scoped: each surface owns a [`ListenerSet`] and
//! emits only to the listeners registered on it. The log callback is the one
//! global hook, for diagnostics.

use crate::selection::SelectionEvent;
use std::fmt;
use std::sync::{Mutex, OnceLock};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Emit a log event to the registered callback.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Identifier for a listener registered on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type SelectListener = Box<dyn FnMut(&SelectionEvent)>;

/// Slab of selection listeners with id-based removal.
#[derive(Default)]
pub(crate) struct ListenerSet {
    entries: Vec<Option<SelectListener>>,
    free_list: Vec<u32>,
}

impl ListenerSet {
    pub(crate) fn add(&mut self, listener: SelectListener) -> ListenerId {
        if let Some(idx) = self.free_list.pop() {
            self.entries[idx as usize] = Some(listener);
            return ListenerId(idx);
        }
        self.entries.push(Some(listener));
        ListenerId((self.entries.len() - 1) as u32)
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        if let Some(slot) = self.entries.get_mut(id.0 as usize) {
            if slot.take().is_some() {
                self.free_list.push(id.0);
                return true;
            }
        }
        false
    }

    pub(crate) fn emit(&mut self, event: &SelectionEvent) {
        for listener in self.entries.iter_mut().flatten() {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.iter().filter(|slot| slot.is_some()).count()
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.len())
            .finish()
    }
}
