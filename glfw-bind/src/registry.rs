//! Ownership of live trampoline adapters
//!
//! The registry maps each `(EventSource, Slot)` key to at most one adapter.
//! It is thread-local: GLFW only fires callbacks on the thread that polls, and
//! `Glfw` cannot leave the thread that created it.
//!
//! Adapters removed from the registry are handed back to the caller so they
//! are dropped after the registry borrow ends.

use crate::callback::{CallbackEvent, EventSource, Handler, HandlerResult, Slot};
use crate::trampoline::NativeCallback;
use crate::types::WindowHandle;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Boxed handler shared between the registry and an in-flight dispatch
pub(crate) type SharedCallback = Rc<RefCell<Box<dyn FnMut(&CallbackEvent) -> HandlerResult>>>;

/// Registry key: one adapter per event source and slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdapterKey {
    pub source: EventSource,
    pub slot: Slot,
}

impl AdapterKey {
    pub fn new(source: EventSource, slot: Slot) -> Self {
        Self { source, slot }
    }
}

/// A registered handler bound to its native trampoline
pub(crate) struct Adapter {
    key: AdapterKey,
    callback: SharedCallback,
    native: NativeCallback,
}

impl Adapter {
    pub(crate) fn new(key: AdapterKey, handler: Handler) -> Self {
        Self {
            key,
            callback: Rc::new(RefCell::new(handler.into_callback())),
            native: NativeCallback::for_slot(key.slot),
        }
    }

    pub(crate) fn key(&self) -> AdapterKey {
        self.key
    }

    pub(crate) fn native(&self) -> NativeCallback {
        self.native
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("key", &self.key)
            .field("native", &self.native)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub(crate) struct Registry {
    adapters: HashMap<AdapterKey, Adapter>,
}

impl Registry {
    /// Store an adapter, returning the one it replaces
    pub(crate) fn insert(&mut self, adapter: Adapter) -> Option<Adapter> {
        self.adapters.insert(adapter.key, adapter)
    }

    pub(crate) fn remove(&mut self, key: &AdapterKey) -> Option<Adapter> {
        self.adapters.remove(key)
    }

    pub(crate) fn contains(&self, key: &AdapterKey) -> bool {
        self.adapters.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Handler for a key, cloned out so the caller can run it unborrowed
    pub(crate) fn callback(&self, key: &AdapterKey) -> Option<SharedCallback> {
        self.adapters.get(key).map(|adapter| Rc::clone(&adapter.callback))
    }

    /// Remove every adapter matching `predicate`
    pub(crate) fn remove_where<P>(&mut self, mut predicate: P) -> Vec<Adapter>
    where
        P: FnMut(&AdapterKey) -> bool,
    {
        let keys: Vec<AdapterKey> = self
            .adapters
            .keys()
            .filter(|key| predicate(key))
            .copied()
            .collect();
        keys.iter()
            .filter_map(|key| self.adapters.remove(key))
            .collect()
    }

    /// Remove every adapter registered for `window`
    pub(crate) fn remove_window(&mut self, window: WindowHandle) -> Vec<Adapter> {
        self.remove_where(|key| key.source == EventSource::Window(window))
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Run `f` with the calling thread's registry
///
/// Must not be nested, and `f` must not run handlers.
pub(crate) fn with<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    REGISTRY.with(|registry| f(&mut registry.borrow_mut()))
}
