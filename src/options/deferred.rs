//! Deferred Module Reference
//!
//! Some modules need another module's settings, but the referenced module can
//! still be replaced by overrides after the dependent one is constructed. A
//! `Deferred<T>` is a handle to the slot itself, bound once when the builder
//! is created and resolved on every read, so dependents always observe the
//! current value instead of a construction-time snapshot.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Handle to the current value of a module slot
pub struct Deferred<T> {
    slot: Arc<Mutex<T>>,
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: Clone> Deferred<T> {
    /// Create a slot holding an initial value
    pub fn new(value: T) -> Self {
        Self {
            slot: Arc::new(Mutex::new(value)),
        }
    }

    /// Resolve to a copy of the value currently held
    pub fn get(&self) -> T {
        match self.slot.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the held value; existing handles observe the replacement
    pub fn set(&self, value: T) {
        match self.slot.lock() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Deferred").field(&self.get()).finish()
    }
}
